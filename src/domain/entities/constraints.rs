//! # Reservation Constraints
//!
//! What a renter asks for when requesting a quote.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::DateRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renter-supplied filter for a quote request.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rental_broker::domain::entities::ReservationConstraints;
/// use rental_broker::domain::value_objects::DateRange;
///
/// let period = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
/// )
/// .unwrap();
///
/// let constraints = ReservationConstraints::new(period, "Compact", Some("north"))
///     .unwrap();
/// assert_eq!(constraints.region(), Some("north"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationConstraints {
    period: DateRange,
    car_type: String,
    region: Option<String>,
}

impl ReservationConstraints {
    /// Creates constraints for a car type over a period, optionally in a region.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCarType` if the car type name is blank.
    pub fn new(
        period: DateRange,
        car_type: impl Into<String>,
        region: Option<&str>,
    ) -> DomainResult<Self> {
        let car_type = car_type.into().trim().to_string();
        if car_type.is_empty() {
            return Err(DomainError::invalid_car_type("requested car type must not be blank"));
        }
        let region = region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        Ok(Self {
            period,
            car_type,
            region,
        })
    }

    /// Returns the requested period.
    #[inline]
    #[must_use]
    pub fn period(&self) -> DateRange {
        self.period
    }

    /// Returns the requested car type name.
    #[inline]
    #[must_use]
    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    /// Returns the requested region, if any.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for ReservationConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.car_type, self.period)?;
        if let Some(region) = &self.region {
            write!(f, " in {region}")?;
        }
        Ok(())
    }
}
