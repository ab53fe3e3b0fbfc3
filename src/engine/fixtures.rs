use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{Booking, BookingStatus, Car, FuelType, Member, Transmission};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn cars() -> Vec<Car> {
    vec![
        Car {
            id: "1".into(),
            brand: "BMW".into(),
            model: "3 Series".into(),
            year: 2024,
            price_per_day: 89.0,
            location: "New York, NY".into(),
            rating: 4.8,
            review_count: 124,
            fuel_type: FuelType::Gasoline,
            passengers: 5,
            transmission: Transmission::Automatic,
            features: vec![
                "GPS Navigation".into(),
                "Bluetooth".into(),
                "Air Conditioning".into(),
                "Backup Camera".into(),
                "Premium Sound System".into(),
                "Leather Seats".into(),
                "Sunroof".into(),
                "Cruise Control".into(),
            ],
            description: "Experience luxury and performance with the BMW 3 Series. \
                This premium sedan offers exceptional comfort, advanced technology, \
                and dynamic driving experience perfect for business trips or leisure travel."
                .into(),
            available: true,
        },
        Car {
            id: "2".into(),
            brand: "Tesla".into(),
            model: "Model S".into(),
            year: 2024,
            price_per_day: 149.0,
            location: "Los Angeles, CA".into(),
            rating: 4.9,
            review_count: 89,
            fuel_type: FuelType::Electric,
            passengers: 5,
            transmission: Transmission::Automatic,
            features: vec![
                "Autopilot".into(),
                "GPS Navigation".into(),
                "Premium Sound System".into(),
                "Heated Seats".into(),
            ],
            description: "All-electric performance sedan with industry-leading range."
                .into(),
            available: true,
        },
        Car {
            id: "3".into(),
            brand: "Mercedes-Benz".into(),
            model: "C-Class Convertible".into(),
            year: 2023,
            price_per_day: 129.0,
            location: "Miami, FL".into(),
            rating: 4.7,
            review_count: 156,
            fuel_type: FuelType::Gasoline,
            passengers: 4,
            transmission: Transmission::Automatic,
            features: vec![
                "Convertible Top".into(),
                "GPS Navigation".into(),
                "Leather Seats".into(),
            ],
            description: "Open-top cruising with Mercedes refinement.".into(),
            available: false,
        },
        Car {
            id: "4".into(),
            brand: "Range Rover".into(),
            model: "Evoque".into(),
            year: 2023,
            price_per_day: 119.0,
            location: "Denver, CO".into(),
            rating: 4.6,
            review_count: 93,
            fuel_type: FuelType::Gasoline,
            passengers: 7,
            transmission: Transmission::Automatic,
            features: vec![
                "All-Wheel Drive".into(),
                "GPS Navigation".into(),
                "Backup Camera".into(),
            ],
            description: "Compact luxury SUV ready for mountain roads.".into(),
            available: true,
        },
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "BK001".into(),
            car_id: "1".into(),
            pickup_date: date(2024, 9, 25),
            return_date: date(2024, 9, 30),
            pickup_location: "New York, NY".into(),
            total_price: 445.0,
            status: BookingStatus::Confirmed,
            booking_date: date(2024, 9, 20),
        },
        Booking {
            id: "BK002".into(),
            car_id: "2".into(),
            pickup_date: date(2024, 10, 15),
            return_date: date(2024, 10, 18),
            pickup_location: "Los Angeles, CA".into(),
            total_price: 447.0,
            status: BookingStatus::Pending,
            booking_date: date(2024, 9, 18),
        },
        Booking {
            id: "BK003".into(),
            car_id: "4".into(),
            pickup_date: date(2024, 8, 10),
            return_date: date(2024, 8, 15),
            pickup_location: "Denver, CO".into(),
            total_price: 595.0,
            status: BookingStatus::Completed,
            booking_date: date(2024, 8, 5),
        },
    ]
}

pub fn member() -> Member {
    Member {
        id: Uuid::new_v4(),
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john.doe@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        address: "123 Main St, New York, NY 10001".into(),
        member_since: date(2023, 1, 15),
        total_bookings: 12,
        total_spent: 2450.0,
    }
}
