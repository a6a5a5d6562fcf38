//! # Domain Entities
//!
//! Aggregate roots and entities representing core business concepts.
//!
//! ## Aggregates
//!
//! - [`RentalCompany`]: a company's fleet, regions and reservations
//!
//! ## Entities
//!
//! - [`CarType`]: a car category with its daily rate
//! - [`Car`]: a single rentable car
//! - [`Quote`]: priced, non-binding offer
//! - [`Reservation`]: confirmed quote bound to a car
//! - [`ReservationConstraints`]: what a renter asks for

pub mod car;
pub mod car_type;
pub mod constraints;
pub mod quote;
pub mod rental_company;
pub mod reservation;

pub use car::Car;
pub use car_type::CarType;
pub use constraints::ReservationConstraints;
pub use quote::Quote;
pub use rental_company::{RentalCompany, RentalRejection};
pub use reservation::Reservation;
