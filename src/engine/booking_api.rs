use super::Engine;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::{
    api::{BookingAPI, CatalogAPI},
    entities::Booking,
    error::{invalid_input_error, unavailable_error, Error},
    history::{self, View},
    pricing,
};

// booking ids continue the BK%03d sequence of the seeded history
fn next_booking_id(bookings: &[Booking]) -> String {
    let max_seq = bookings
        .iter()
        .filter_map(|booking| booking.id.strip_prefix("BK"))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("BK{:03}", max_seq + 1)
}

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_booking(
        &self,
        car_id: &str,
        pickup_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<Booking, Error> {
        let car = self.find_car(car_id).await?;

        if !car.is_available() {
            return Err(unavailable_error());
        }

        let quote = pricing::quote(Some(pickup_date), Some(return_date), car.price_per_day);

        let mut bookings = self.bookings.write().await;

        let booking = Booking::new(
            next_booking_id(&bookings),
            car.id.clone(),
            pickup_date,
            return_date,
            car.location.clone(),
            quote.total,
            Utc::now().date_naive(),
        );

        bookings.push(booking.clone());
        self.member.write().await.record_booking(booking.total_price);

        tracing::info!(booking_id = %booking.id, total = booking.total_price, "booking created");

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn find_booking(&self, id: &str) -> Result<Booking, Error> {
        let bookings = self.bookings.read().await;

        bookings
            .iter()
            .find(|booking| booking.id == id)
            .cloned()
            .ok_or_else(|| invalid_input_error())
    }

    #[tracing::instrument(skip(self))]
    async fn list_bookings(&self, view: View) -> Result<Vec<Booking>, Error> {
        let bookings = self.bookings.read().await;

        Ok(history::filter(&bookings, view, self.today()))
    }

    #[tracing::instrument(skip(self))]
    async fn confirm_booking(&self, id: &str) -> Result<Booking, Error> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or_else(|| invalid_input_error())?;

        booking.confirm()?;

        Ok(booking.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn cancel_booking(&self, id: &str) -> Result<Booking, Error> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or_else(|| invalid_input_error())?;

        booking.cancel()?;

        Ok(booking.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn complete_booking(&self, id: &str) -> Result<Booking, Error> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or_else(|| invalid_input_error())?;

        booking.complete()?;

        Ok(booking.clone())
    }
}

#[test]
fn booking_ids_continue_the_sequence() {
    assert_eq!(next_booking_id(&super::fixtures::bookings()), "BK004");
    assert_eq!(next_booking_id(&[]), "BK001");
}
