use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub member_since: NaiveDate,
    pub total_bookings: u32,
    pub total_spent: f64,
}

/// Caller-owned edit-form state. Unset fields leave the member
/// untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[tracing::instrument]
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
    }

    pub fn record_booking(&mut self, total_price: f64) {
        self.total_bookings += 1;
        self.total_spent += total_price;
    }
}

#[test]
fn apply_overrides_only_set_fields() {
    use chrono::NaiveDate;

    let mut member = Member {
        id: Uuid::new_v4(),
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john.doe@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        address: "123 Main St, New York, NY 10001".into(),
        member_since: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        total_bookings: 12,
        total_spent: 2450.0,
    };

    member.apply(ProfileUpdate {
        email: Some("john@example.com".into()),
        ..Default::default()
    });

    assert_eq!(member.email, "john@example.com");
    assert_eq!(member.first_name, "John");
    assert_eq!(member.full_name(), "John Doe");
}

#[test]
fn record_booking_bumps_aggregates() {
    use chrono::NaiveDate;

    let mut member = Member {
        id: Uuid::new_v4(),
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john.doe@example.com".into(),
        phone: "".into(),
        address: "".into(),
        member_since: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        total_bookings: 0,
        total_spent: 0.0,
    };

    member.record_booking(445.0);
    member.record_booking(447.0);

    assert_eq!(member.total_bookings, 2);
    assert_eq!(member.total_spent, 892.0);
}
