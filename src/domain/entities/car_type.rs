//! # Car Type Entity
//!
//! A category of car offered by a rental company, with its daily rate.
//!
//! # Examples
//!
//! ```
//! use rental_broker::domain::entities::CarType;
//! use rental_broker::domain::value_objects::Price;
//!
//! let compact = CarType::new("Compact", 4, 350.0, Price::new(42.0).unwrap(), false).unwrap();
//! assert_eq!(compact.name(), "Compact");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A car category.
///
/// Identity is the type name: two values with the same name compare equal
/// and hash the same, whatever their other attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarType {
    name: String,
    seats: u32,
    trunk_space: f32,
    price_per_day: Price,
    smoking_allowed: bool,
}

impl CarType {
    /// Creates a car type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCarType` if the name is blank, there are
    /// no seats, or the trunk space is negative or not finite.
    pub fn new(
        name: impl Into<String>,
        seats: u32,
        trunk_space: f32,
        price_per_day: Price,
        smoking_allowed: bool,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::invalid_car_type("name must not be blank"));
        }
        if seats == 0 {
            return Err(DomainError::invalid_car_type(format!(
                "{name} must have at least one seat"
            )));
        }
        if !trunk_space.is_finite() || trunk_space < 0.0 {
            return Err(DomainError::invalid_car_type(format!(
                "{name} has invalid trunk space {trunk_space}"
            )));
        }
        Ok(Self {
            name,
            seats,
            trunk_space,
            price_per_day,
            smoking_allowed,
        })
    }

    /// Returns the type name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of seats.
    #[inline]
    #[must_use]
    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Returns the trunk space in litres.
    #[inline]
    #[must_use]
    pub fn trunk_space(&self) -> f32 {
        self.trunk_space
    }

    /// Returns the rental price per day.
    #[inline]
    #[must_use]
    pub fn price_per_day(&self) -> Price {
        self.price_per_day
    }

    /// Returns true if smoking is allowed.
    #[inline]
    #[must_use]
    pub fn smoking_allowed(&self) -> bool {
        self.smoking_allowed
    }
}

impl PartialEq for CarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CarType {}

impl Hash for CarType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} seats, {} l trunk, {}/day{})",
            self.name,
            self.seats,
            self.trunk_space,
            self.price_per_day,
            if self.smoking_allowed { ", smoking" } else { "" }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn price(value: f64) -> Price {
        Price::new(value).unwrap()
    }

    #[test]
    fn identity_is_the_name() {
        let a = CarType::new("Van", 8, 900.0, price(80.0), false).unwrap();
        let b = CarType::new("Van", 9, 700.0, price(95.0), true).unwrap();
        assert_eq!(a, b);

        let set: HashSet<CarType> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_blank_name() {
        assert!(CarType::new("  ", 4, 300.0, price(10.0), false).is_err());
    }

    #[test]
    fn rejects_zero_seats_and_bad_trunk() {
        assert!(CarType::new("Mini", 0, 100.0, price(10.0), false).is_err());
        assert!(CarType::new("Mini", 2, -1.0, price(10.0), false).is_err());
        assert!(CarType::new("Mini", 2, f32::NAN, price(10.0), false).is_err());
    }

    #[test]
    fn display_mentions_rate() {
        let t = CarType::new("Compact", 4, 350.0, price(42.0), true).unwrap();
        let s = t.to_string();
        assert!(s.contains("Compact"));
        assert!(s.contains("42.00/day"));
        assert!(s.contains("smoking"));
    }
}
