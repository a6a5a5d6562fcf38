//! # Reservation Entity
//!
//! A confirmed quote bound to a concrete car.

use crate::domain::entities::quote::Quote;
use crate::domain::value_objects::{
    CarId, CompanyName, DateRange, Price, RenterName, ReservationId, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binding reservation.
///
/// Only produced by a successful commit on the company that owns the quote;
/// the car id always belongs to that company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    quote: Quote,
    car_id: CarId,
    confirmed_at: Timestamp,
}

impl Reservation {
    /// Creates a reservation from a quote and the car assigned to it.
    #[must_use]
    pub fn new(quote: Quote, car_id: CarId) -> Self {
        Self {
            id: ReservationId::new_v4(),
            quote,
            car_id,
            confirmed_at: Timestamp::now(),
        }
    }

    /// Returns the reservation ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the quote this reservation was made from.
    #[inline]
    #[must_use]
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Returns the assigned car.
    #[inline]
    #[must_use]
    pub fn car_id(&self) -> CarId {
        self.car_id
    }

    /// Returns when the reservation was committed.
    #[inline]
    #[must_use]
    pub fn confirmed_at(&self) -> Timestamp {
        self.confirmed_at
    }

    /// Returns the renter.
    #[inline]
    #[must_use]
    pub fn renter(&self) -> &RenterName {
        self.quote.renter()
    }

    /// Returns the owning company.
    #[inline]
    #[must_use]
    pub fn company(&self) -> &CompanyName {
        self.quote.company()
    }

    /// Returns the rental period.
    #[inline]
    #[must_use]
    pub fn period(&self) -> DateRange {
        self.quote.period()
    }

    /// Returns the car type name.
    #[inline]
    #[must_use]
    pub fn car_type(&self) -> &str {
        self.quote.car_type()
    }

    /// Returns the total rental price.
    #[inline]
    #[must_use]
    pub fn rental_price(&self) -> Price {
        self.quote.rental_price()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation for {} from {} at {}: {} car {} for {}",
            self.renter(),
            self.period(),
            self.company(),
            self.car_type(),
            self.car_id,
            self.rental_price()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn delegates_to_quote() {
        let quote = Quote::new(
            RenterName::new("carol").unwrap(),
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 7, 8).unwrap(),
            )
            .unwrap(),
            CompanyName::new("Sixt").unwrap(),
            "Cabrio",
            Price::new(700.0).unwrap(),
        );
        let reservation = Reservation::new(quote.clone(), CarId::new(3));

        assert_eq!(reservation.quote(), &quote);
        assert_eq!(reservation.renter().as_str(), "carol");
        assert_eq!(reservation.company().as_str(), "Sixt");
        assert_eq!(reservation.car_type(), "Cabrio");
        assert_eq!(reservation.car_id(), CarId::new(3));
        assert_eq!(reservation.period().days(), 7);
        assert!(reservation.to_string().contains("car 3"));
    }
}
