//! # Quote Entity
//!
//! A non-binding priced offer from one rental company to one renter.
//!
//! This module provides the [`Quote`] entity. Quotes are produced by a
//! company's inventory, held in a renter's cart, and turned into a
//! [`Reservation`](crate::domain::entities::Reservation) on commit.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rental_broker::domain::entities::Quote;
//! use rental_broker::domain::value_objects::{CompanyName, DateRange, Price, RenterName};
//!
//! let period = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
//! )
//! .unwrap();
//!
//! let quote = Quote::new(
//!     RenterName::new("alice").unwrap(),
//!     period,
//!     CompanyName::new("Hertz").unwrap(),
//!     "Compact",
//!     Price::new(120.0).unwrap(),
//! );
//!
//! assert_eq!(quote.company().as_str(), "Hertz");
//! ```

use crate::domain::value_objects::{CompanyName, DateRange, Price, QuoteId, RenterName, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced offer tied to a renter, period, company and car type.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for this quote.
    id: QuoteId,
    /// Who the offer is for.
    renter: RenterName,
    /// Rental period.
    period: DateRange,
    /// Company that made the offer.
    company: CompanyName,
    /// Name of the quoted car type.
    car_type: String,
    /// Total price for the whole period.
    rental_price: Price,
    /// When this quote was created.
    created_at: Timestamp,
}

impl Quote {
    /// Creates a new quote stamped with the current time.
    #[must_use]
    pub fn new(
        renter: RenterName,
        period: DateRange,
        company: CompanyName,
        car_type: impl Into<String>,
        rental_price: Price,
    ) -> Self {
        Self {
            id: QuoteId::new_v4(),
            renter,
            period,
            company,
            car_type: car_type.into(),
            rental_price,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the quote ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> QuoteId {
        self.id
    }

    /// Returns the renter.
    #[inline]
    #[must_use]
    pub fn renter(&self) -> &RenterName {
        &self.renter
    }

    /// Returns the rental period.
    #[inline]
    #[must_use]
    pub fn period(&self) -> DateRange {
        self.period
    }

    /// Returns the owning company.
    #[inline]
    #[must_use]
    pub fn company(&self) -> &CompanyName {
        &self.company
    }

    /// Returns the quoted car type name.
    #[inline]
    #[must_use]
    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    /// Returns the total rental price.
    #[inline]
    #[must_use]
    pub fn rental_price(&self) -> Price {
        self.rental_price
    }

    /// Returns when this quote was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote for {} from {} at {}: {} for {}",
            self.renter, self.period, self.company, self.car_type, self.rental_price
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn quote() -> Quote {
        Quote::new(
            RenterName::new("bob").unwrap(),
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            )
            .unwrap(),
            CompanyName::new("Avis").unwrap(),
            "Van",
            Price::new(90.0).unwrap(),
        )
    }

    #[test]
    fn each_quote_gets_its_own_id() {
        assert_ne!(quote().id(), quote().id());
    }

    #[test]
    fn display() {
        let s = quote().to_string();
        assert!(s.contains("bob"));
        assert!(s.contains("Avis"));
        assert!(s.contains("Van"));
        assert!(s.contains("90.00"));
    }

    #[test]
    fn serde_round_trip_keeps_identity() {
        let q = quote();
        let json = serde_json::to_string(&q).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
