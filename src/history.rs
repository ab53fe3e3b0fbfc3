use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::Booking;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    All,
    Upcoming,
    Past,
}

impl View {
    pub fn name(&self) -> String {
        match self {
            Self::All => "all".into(),
            Self::Upcoming => "upcoming".into(),
            Self::Past => "past".into(),
        }
    }

    /// Unrecognized selectors fall back to `All` so no booking is ever
    /// silently hidden.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "upcoming" => Self::Upcoming,
            "past" => Self::Past,
            _ => Self::All,
        }
    }
}

/// Restricts a booking list to the requested view, preserving input
/// order. `Upcoming` holds live bookings with a pick-up after `today`;
/// cancelled and completed bookings always land in `Past` regardless of
/// their dates, so the two views partition every list.
pub fn filter(bookings: &[Booking], view: View, today: NaiveDate) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| match view {
            View::All => true,
            View::Upcoming => booking.is_upcoming(today),
            View::Past => booking.is_past(today),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
fn test_booking(id: &str, pickup: NaiveDate, status: crate::entities::BookingStatus) -> Booking {
    Booking {
        id: id.into(),
        car_id: "1".into(),
        pickup_date: pickup,
        return_date: pickup + chrono::Duration::days(3),
        pickup_location: "New York, NY".into(),
        total_price: 267.0,
        status,
        booking_date: pickup - chrono::Duration::days(5),
    }
}

#[cfg(test)]
fn sample() -> Vec<Booking> {
    use crate::entities::BookingStatus;

    vec![
        test_booking("BK001", date(2024, 9, 25), BookingStatus::Confirmed),
        test_booking("BK002", date(2024, 10, 15), BookingStatus::Pending),
        test_booking("BK003", date(2024, 8, 10), BookingStatus::Completed),
    ]
}

#[test]
fn all_returns_every_booking_in_order() {
    let bookings = sample();
    let filtered = filter(&bookings, View::All, date(2024, 9, 20));

    assert_eq!(filtered.len(), bookings.len());
    let ids: Vec<_> = filtered.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["BK001", "BK002", "BK003"]);
}

#[test]
fn upcoming_excludes_past_and_settled_bookings() {
    let filtered = filter(&sample(), View::Upcoming, date(2024, 9, 20));

    let ids: Vec<_> = filtered.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["BK001", "BK002"]);
}

#[test]
fn past_includes_completed_regardless_of_date() {
    let filtered = filter(&sample(), View::Past, date(2024, 9, 20));

    let ids: Vec<_> = filtered.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["BK003"]);
}

#[test]
fn cancelled_future_booking_is_past_not_upcoming() {
    use crate::entities::BookingStatus;

    let bookings = vec![test_booking(
        "BK004",
        date(2024, 12, 1),
        BookingStatus::Cancelled,
    )];
    let today = date(2024, 9, 20);

    assert!(filter(&bookings, View::Upcoming, today).is_empty());
    assert_eq!(filter(&bookings, View::Past, today).len(), 1);
}

#[test]
fn pickup_today_counts_as_past() {
    use crate::entities::BookingStatus;

    let today = date(2024, 9, 25);
    let bookings = vec![test_booking("BK001", today, BookingStatus::Confirmed)];

    assert!(filter(&bookings, View::Upcoming, today).is_empty());
    assert_eq!(filter(&bookings, View::Past, today).len(), 1);
}

#[test]
fn upcoming_and_past_partition_every_booking() {
    use crate::entities::BookingStatus;

    let statuses = [
        BookingStatus::Confirmed,
        BookingStatus::Pending,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];
    let today = date(2024, 9, 20);

    let mut bookings = Vec::new();
    for (i, status) in statuses.iter().enumerate() {
        bookings.push(test_booking(&format!("P{i}"), date(2024, 8, 1), *status));
        bookings.push(test_booking(&format!("F{i}"), date(2024, 10, 1), *status));
    }

    let upcoming = filter(&bookings, View::Upcoming, today);
    let past = filter(&bookings, View::Past, today);

    assert_eq!(upcoming.len() + past.len(), bookings.len());
    for b in &upcoming {
        assert!(!past.iter().any(|p| p.id == b.id));
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let today = date(2024, 9, 20);

    assert!(filter(&[], View::All, today).is_empty());
    assert!(filter(&[], View::Upcoming, today).is_empty());
    assert!(filter(&[], View::Past, today).is_empty());
}

#[test]
fn unknown_selector_defaults_to_all() {
    assert_eq!(View::parse("upcoming"), View::Upcoming);
    assert_eq!(View::parse("past"), View::Past);
    assert_eq!(View::parse("archived"), View::All);
    assert_eq!(View::parse(""), View::All);
    assert_eq!(View::default(), View::All);
}
