use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ephemeral price computation shown before a booking exists. Quotes
/// carry no identity and are recomputed on every date change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub daily_rate: f64,
    pub days: i64,
    pub total: f64,
}
