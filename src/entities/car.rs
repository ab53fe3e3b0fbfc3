use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price_per_day: f64,
    pub location: String,
    pub rating: f64,
    pub review_count: u32,
    pub fuel_type: FuelType,
    pub passengers: u32,
    pub transmission: Transmission,
    pub features: Vec<String>,
    pub description: String,
    pub available: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Electric,
    Hybrid,
    Diesel,
}

impl FuelType {
    pub fn name(&self) -> String {
        match self {
            Self::Gasoline => "gasoline".into(),
            Self::Electric => "electric".into(),
            Self::Hybrid => "hybrid".into(),
            Self::Diesel => "diesel".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Car {
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.brand, self.model)
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}
