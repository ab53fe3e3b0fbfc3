mod booking_api;
mod catalog_api;
mod fixtures;
mod profile_api;
mod quote_api;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::api::API;
use crate::entities::{Booking, Car, Member};

/// In-memory engine behind the storefront. State is seeded with the demo
/// fleet and booking history; nothing is persisted.
#[derive(Debug)]
pub struct Engine {
    cars: RwLock<Vec<Car>>,
    bookings: RwLock<Vec<Booking>>,
    member: RwLock<Member>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new() -> Self {
        Self {
            cars: RwLock::new(fixtures::cars()),
            bookings: RwLock::new(fixtures::bookings()),
            member: RwLock::new(fixtures::member()),
        }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl API for Engine {}

#[test]
fn new_engine_seeds_demo_data() {
    use crate::api::{BookingAPI, CatalogAPI};
    use crate::catalog::SearchFilter;
    use crate::history::View;
    use tokio_test::block_on;

    let engine = Engine::new();

    let cars = block_on(engine.search_cars(&SearchFilter::default(), None)).unwrap();
    assert_eq!(cars.len(), 4);

    let bookings = block_on(engine.list_bookings(View::All)).unwrap();
    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0].id, "BK001");
}

#[test]
fn quote_uses_the_cars_daily_rate() {
    use crate::api::QuoteAPI;
    use chrono::NaiveDate;
    use tokio_test::block_on;

    let engine = Engine::new();

    let pickup = NaiveDate::from_ymd_opt(2024, 9, 25).unwrap();
    let ret = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();

    let quote = block_on(engine.create_quote("1", Some(pickup), Some(ret))).unwrap();
    assert_eq!(quote.days, 5);
    assert_eq!(quote.total, 445.0);

    let default_quote = block_on(engine.create_quote("2", None, None)).unwrap();
    assert_eq!(default_quote.days, 1);
    assert_eq!(default_quote.total, 149.0);
}

#[test]
fn unknown_car_is_rejected() {
    use crate::api::{CatalogAPI, QuoteAPI};
    use tokio_test::block_on;

    let engine = Engine::new();

    assert!(block_on(engine.find_car("99")).is_err());
    assert!(block_on(engine.create_quote("99", None, None)).is_err());
}

#[test]
fn booking_flow() {
    use crate::api::BookingAPI;
    use crate::entities::BookingStatus;
    use crate::history::View;
    use chrono::Duration;
    use tokio_test::block_on;

    let engine = Engine::new();

    let pickup = engine.today() + Duration::days(10);
    let ret = pickup + Duration::days(4);

    let booking = block_on(engine.create_booking("1", pickup, ret)).unwrap();
    assert_eq!(booking.id, "BK004");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_price, 4.0 * 89.0);
    assert_eq!(booking.pickup_location, "New York, NY");

    let upcoming = block_on(engine.list_bookings(View::Upcoming)).unwrap();
    assert!(upcoming.iter().any(|b| b.id == booking.id));

    let confirmed = block_on(engine.confirm_booking(&booking.id)).unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let cancelled = block_on(engine.cancel_booking(&booking.id)).unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    // cancelled bookings drop out of the upcoming view
    let upcoming = block_on(engine.list_bookings(View::Upcoming)).unwrap();
    assert!(!upcoming.iter().any(|b| b.id == booking.id));
}

#[test]
fn unavailable_car_cannot_be_booked() {
    use crate::api::BookingAPI;
    use chrono::Duration;
    use tokio_test::block_on;

    let engine = Engine::new();

    let pickup = engine.today() + Duration::days(3);
    let ret = pickup + Duration::days(2);

    // car 3 is listed but unavailable
    assert!(block_on(engine.create_booking("3", pickup, ret)).is_err());
}

#[test]
fn booking_updates_member_aggregates() {
    use crate::api::{BookingAPI, ProfileAPI};
    use chrono::Duration;
    use tokio_test::block_on;

    let engine = Engine::new();

    let before = block_on(engine.profile()).unwrap();

    let pickup = engine.today() + Duration::days(7);
    let booking = block_on(engine.create_booking("4", pickup, pickup + Duration::days(5))).unwrap();

    let after = block_on(engine.profile()).unwrap();
    assert_eq!(after.total_bookings, before.total_bookings + 1);
    assert_eq!(after.total_spent, before.total_spent + booking.total_price);
}

#[test]
fn save_profile_applies_update() {
    use crate::api::ProfileAPI;
    use crate::entities::ProfileUpdate;
    use tokio_test::block_on;

    let engine = Engine::new();

    let member = block_on(engine.save_profile(ProfileUpdate {
        phone: Some("+1 (555) 987-6543".into()),
        ..Default::default()
    }))
    .unwrap();

    assert_eq!(member.phone, "+1 (555) 987-6543");
    assert_eq!(member.first_name, "John");
}
