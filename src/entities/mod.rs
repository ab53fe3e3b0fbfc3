mod booking;
mod car;
mod member;
mod quote;

pub use booking::{Booking, Status as BookingStatus};
pub use car::{Car, FuelType, Transmission};
pub use member::{Member, ProfileUpdate};
pub use quote::Quote;
