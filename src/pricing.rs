use chrono::NaiveDate;

use crate::entities::Quote;

/// Whole-day rental duration for a pick-up/return pair. With either date
/// unset the duration defaults to a single day so a displayable price
/// always exists. Reversed ranges are normalized via the absolute
/// difference and identical dates count as one day.
pub fn rental_days(pickup_date: Option<NaiveDate>, return_date: Option<NaiveDate>) -> i64 {
    match (pickup_date, return_date) {
        (Some(pickup), Some(ret)) => (ret - pickup).num_days().abs().max(1),
        _ => 1,
    }
}

pub fn quote(
    pickup_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    daily_rate: f64,
) -> Quote {
    let days = rental_days(pickup_date, return_date);

    Quote {
        pickup_date,
        return_date,
        daily_rate,
        days,
        total: days as f64 * daily_rate,
    }
}

#[cfg(test)]
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn five_day_rental() {
    let quote = quote(Some(date(2024, 9, 25)), Some(date(2024, 9, 30)), 89.0);

    assert_eq!(quote.days, 5);
    assert_eq!(quote.total, 445.0);
}

#[test]
fn identical_dates_count_as_one_day() {
    let quote = quote(Some(date(2024, 9, 25)), Some(date(2024, 9, 25)), 89.0);

    assert_eq!(quote.days, 1);
    assert_eq!(quote.total, 89.0);
}

#[test]
fn missing_dates_default_to_single_day() {
    assert_eq!(quote(None, None, 149.0).total, 149.0);
    assert_eq!(quote(Some(date(2024, 10, 15)), None, 149.0).days, 1);
    assert_eq!(quote(None, Some(date(2024, 10, 18)), 149.0).days, 1);
}

#[test]
fn reversed_dates_quote_the_same_total() {
    let forward = quote(Some(date(2024, 10, 15)), Some(date(2024, 10, 18)), 149.0);
    let reversed = quote(Some(date(2024, 10, 18)), Some(date(2024, 10, 15)), 149.0);

    assert_eq!(forward.days, 3);
    assert_eq!(forward.days, reversed.days);
    assert_eq!(forward.total, reversed.total);
}

#[test]
fn days_match_calendar_difference() {
    for span in 1..30 {
        let pickup = date(2024, 9, 1);
        let ret = pickup + chrono::Duration::days(span);

        assert_eq!(rental_days(Some(pickup), Some(ret)), span);
    }
}
