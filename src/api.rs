use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::catalog::{SearchFilter, SortOrder};
use crate::entities::{Booking, Car, Member, ProfileUpdate, Quote};
use crate::error::Error;
use crate::history::View;

#[async_trait]
pub trait CatalogAPI {
    async fn search_cars(
        &self,
        filter: &SearchFilter,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Car>, Error>;
    async fn find_car(&self, id: &str) -> Result<Car, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        car_id: &str,
        pickup_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> Result<Quote, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(
        &self,
        car_id: &str,
        pickup_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<Booking, Error>;
    async fn find_booking(&self, id: &str) -> Result<Booking, Error>;
    async fn list_bookings(&self, view: View) -> Result<Vec<Booking>, Error>;
    async fn confirm_booking(&self, id: &str) -> Result<Booking, Error>;
    async fn cancel_booking(&self, id: &str) -> Result<Booking, Error>;
    async fn complete_booking(&self, id: &str) -> Result<Booking, Error>;
}

#[async_trait]
pub trait ProfileAPI {
    async fn profile(&self) -> Result<Member, Error>;
    async fn save_profile(&self, update: ProfileUpdate) -> Result<Member, Error>;
}

pub trait API: CatalogAPI + QuoteAPI + BookingAPI + ProfileAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
