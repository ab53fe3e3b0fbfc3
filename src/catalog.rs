use serde::{Deserialize, Serialize};

use crate::entities::{Car, FuelType};

/// Caller-owned search-form state. Every unset criterion passes; set
/// criteria are conjoined.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub brand: Option<String>,
    pub fuel_type: Option<FuelType>,
    pub min_passengers: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    PriceLowHigh,
    PriceHighLow,
    Rating,
}

impl SearchFilter {
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let brand = car.brand.to_lowercase();
            let model = car.model.to_lowercase();
            if !brand.contains(&query) && !model.contains(&query) {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !car
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if car.price_per_day < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if car.price_per_day > max_price {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if &car.brand != brand {
                return false;
            }
        }

        if let Some(fuel_type) = self.fuel_type {
            if car.fuel_type != fuel_type {
                return false;
            }
        }

        if let Some(min_passengers) = self.min_passengers {
            if car.passengers < min_passengers {
                return false;
            }
        }

        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn search(cars: &[Car], filter: &SearchFilter, sort: Option<SortOrder>) -> Vec<Car> {
    let mut results: Vec<Car> = cars.iter().filter(|car| filter.matches(car)).cloned().collect();

    if let Some(order) = sort {
        match order {
            SortOrder::PriceLowHigh => {
                results.sort_by(|a, b| a.price_per_day.total_cmp(&b.price_per_day))
            }
            SortOrder::PriceHighLow => {
                results.sort_by(|a, b| b.price_per_day.total_cmp(&a.price_per_day))
            }
            SortOrder::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }

    results
}

pub fn available_count(cars: &[Car]) -> usize {
    cars.iter().filter(|car| car.available).count()
}

#[cfg(test)]
fn test_car(id: &str, brand: &str, model: &str, price: f64, fuel: FuelType, seats: u32) -> Car {
    use crate::entities::Transmission;

    Car {
        id: id.into(),
        brand: brand.into(),
        model: model.into(),
        year: 2024,
        price_per_day: price,
        location: "New York, NY".into(),
        rating: 4.8,
        review_count: 124,
        fuel_type: fuel,
        passengers: seats,
        transmission: Transmission::Automatic,
        features: vec![],
        description: "".into(),
        available: true,
    }
}

#[cfg(test)]
fn fleet() -> Vec<Car> {
    vec![
        test_car("1", "BMW", "3 Series", 89.0, FuelType::Gasoline, 5),
        test_car("2", "Tesla", "Model S", 149.0, FuelType::Electric, 5),
        test_car("3", "Mercedes-Benz", "C-Class", 129.0, FuelType::Gasoline, 4),
        test_car("4", "Range Rover", "Evoque", 119.0, FuelType::Gasoline, 7),
    ]
}

#[test]
fn default_filter_matches_everything() {
    let cars = fleet();
    let results = search(&cars, &SearchFilter::default(), None);

    assert_eq!(results.len(), cars.len());
    let ids: Vec<_> = results.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn query_matches_brand_or_model_case_insensitive() {
    let cars = fleet();

    let filter = SearchFilter {
        query: Some("tesla".into()),
        ..Default::default()
    };
    assert_eq!(search(&cars, &filter, None).len(), 1);

    let filter = SearchFilter {
        query: Some("evoque".into()),
        ..Default::default()
    };
    assert_eq!(search(&cars, &filter, None)[0].id, "4");
}

#[test]
fn criteria_are_conjoined() {
    let cars = fleet();

    let filter = SearchFilter {
        fuel_type: Some(FuelType::Gasoline),
        min_passengers: Some(5),
        max_price: Some(100.0),
        ..Default::default()
    };

    let results = search(&cars, &filter, None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].brand, "BMW");
}

#[test]
fn price_bounds_are_inclusive() {
    let cars = fleet();

    let filter = SearchFilter {
        min_price: Some(119.0),
        max_price: Some(129.0),
        ..Default::default()
    };

    let results = search(&cars, &filter, None);
    let ids: Vec<_> = results.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4"]);
}

#[test]
fn sort_orders_results() {
    let cars = fleet();

    let cheapest_first = search(&cars, &SearchFilter::default(), Some(SortOrder::PriceLowHigh));
    assert_eq!(cheapest_first[0].id, "1");
    assert_eq!(cheapest_first[3].id, "2");

    let priciest_first = search(&cars, &SearchFilter::default(), Some(SortOrder::PriceHighLow));
    assert_eq!(priciest_first[0].id, "2");
}

#[test]
fn clear_resets_every_criterion() {
    let mut filter = SearchFilter {
        query: Some("bmw".into()),
        min_price: Some(50.0),
        min_passengers: Some(7),
        ..Default::default()
    };

    filter.clear();

    assert_eq!(search(&fleet(), &filter, None).len(), 4);
}

#[test]
fn available_count_skips_unavailable_cars() {
    let mut cars = fleet();
    cars[2].available = false;

    assert_eq!(available_count(&cars), 3);
}
