//! # Car Entity
//!
//! A single rentable car and the reservations made against it.

use crate::domain::entities::reservation::Reservation;
use crate::domain::value_objects::{CarId, DateRange};
use serde::{Deserialize, Serialize};

/// A car belonging to one rental company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    id: CarId,
    car_type: String,
    reservations: Vec<Reservation>,
}

impl Car {
    /// Creates a car of the given type with no reservations.
    #[must_use]
    pub fn new(id: CarId, car_type: impl Into<String>) -> Self {
        Self {
            id,
            car_type: car_type.into(),
            reservations: Vec::new(),
        }
    }

    /// Returns the car ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> CarId {
        self.id
    }

    /// Returns the car type name.
    #[inline]
    #[must_use]
    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    /// Returns the reservations made for this car, oldest first.
    #[inline]
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns true if no reservation overlaps the period.
    #[must_use]
    pub fn is_available(&self, period: &DateRange) -> bool {
        self.reservations.iter().all(|r| !r.period().overlaps(period))
    }

    /// Records a reservation. The caller checks availability first.
    pub(crate) fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }
}
