use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_invocation_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub car_id: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location: String,
    pub total_price: f64,
    pub status: Status,
    pub booking_date: NaiveDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Confirmed => "confirmed".into(),
            Self::Pending => "pending".into(),
            Self::Cancelled => "cancelled".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl Booking {
    pub fn new(
        id: String,
        car_id: String,
        pickup_date: NaiveDate,
        return_date: NaiveDate,
        pickup_location: String,
        total_price: f64,
        booking_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            car_id,
            pickup_date,
            return_date,
            pickup_location,
            total_price,
            status: Status::Pending,
            booking_date,
        }
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match self.status {
            Status::Cancelled | Status::Completed => false,
            Status::Confirmed | Status::Pending => self.pickup_date > today,
        }
    }

    // cancelled and completed bookings are always past, even with a
    // future pickup date
    pub fn is_past(&self, today: NaiveDate) -> bool {
        match self.status {
            Status::Cancelled | Status::Completed => true,
            Status::Confirmed | Status::Pending => self.pickup_date <= today,
        }
    }

    #[tracing::instrument]
    pub fn confirm(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Pending => {
                self.status = Status::Confirmed;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument]
    pub fn cancel(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Pending | Status::Confirmed => {
                self.status = Status::Cancelled;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument]
    pub fn complete(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Confirmed => {
                self.status = Status::Completed;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }
}

#[cfg(test)]
fn test_booking(status: Status) -> Booking {
    use chrono::NaiveDate;

    Booking {
        id: "BK001".into(),
        car_id: "1".into(),
        pickup_date: NaiveDate::from_ymd_opt(2024, 9, 25).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
        pickup_location: "New York, NY".into(),
        total_price: 445.0,
        status,
        booking_date: NaiveDate::from_ymd_opt(2024, 9, 20).unwrap(),
    }
}

#[test]
fn pending_booking_transitions() {
    let mut booking = test_booking(Status::Pending);

    booking.confirm().unwrap();
    assert_eq!(booking.status, Status::Confirmed);

    booking.complete().unwrap();
    assert_eq!(booking.status, Status::Completed);
}

#[test]
fn cancel_from_pending_and_confirmed() {
    let mut booking = test_booking(Status::Pending);
    booking.cancel().unwrap();
    assert_eq!(booking.status, Status::Cancelled);

    let mut booking = test_booking(Status::Confirmed);
    booking.cancel().unwrap();
    assert_eq!(booking.status, Status::Cancelled);
}

#[test]
fn invalid_transitions_are_rejected() {
    let mut booking = test_booking(Status::Completed);
    assert!(booking.cancel().is_err());
    assert!(booking.confirm().is_err());

    let mut booking = test_booking(Status::Pending);
    assert!(booking.complete().is_err());

    let mut booking = test_booking(Status::Cancelled);
    assert!(booking.confirm().is_err());
    assert!(booking.complete().is_err());
}

#[test]
fn status_serializes_with_name_tag() {
    let booking = test_booking(Status::Confirmed);

    let value = serde_json::to_value(&booking).unwrap();
    assert_eq!(value["status"]["name"], "confirmed");
    assert_eq!(value["pickup_date"], "2024-09-25");
}
