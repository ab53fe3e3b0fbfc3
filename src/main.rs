use std::sync::Arc;

use chrono::{Duration, Utc};

use carrus::api::{BookingAPI, CatalogAPI, DynAPI, ProfileAPI, QuoteAPI};
use carrus::catalog::{SearchFilter, SortOrder};
use carrus::engine::Engine;
use carrus::history::View;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let engine = Arc::new(Engine::new()) as DynAPI;

    let filter = SearchFilter {
        min_passengers: Some(5),
        ..Default::default()
    };
    let cars = engine
        .search_cars(&filter, Some(SortOrder::PriceLowHigh))
        .await
        .unwrap();
    for car in &cars {
        tracing::info!(
            car_id = %car.id,
            rate = car.price_per_day,
            "{}",
            car.display_name()
        );
    }

    let pickup = Utc::now().date_naive() + Duration::days(7);
    let ret = pickup + Duration::days(4);

    let quote = engine
        .create_quote(&cars[0].id, Some(pickup), Some(ret))
        .await
        .unwrap();
    tracing::info!(days = quote.days, total = quote.total, "quote");

    let booking = engine
        .create_booking(&cars[0].id, pickup, ret)
        .await
        .unwrap();

    let upcoming = engine.list_bookings(View::Upcoming).await.unwrap();
    tracing::info!(count = upcoming.len(), "upcoming bookings");

    let booking = engine.confirm_booking(&booking.id).await.unwrap();
    tracing::info!(booking_id = %booking.id, status = %booking.status.name(), "booking");

    let member = engine.profile().await.unwrap();
    tracing::info!(
        bookings = member.total_bookings,
        spent = member.total_spent,
        "{}",
        member.full_name()
    );
}
