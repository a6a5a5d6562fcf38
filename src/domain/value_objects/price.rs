//! # Price Value Object
//!
//! Non-negative decimal amount used for daily rates and quote totals.
//!
//! # Examples
//!
//! ```
//! use rental_broker::domain::value_objects::Price;
//!
//! let per_day = Price::new(45.5).unwrap();
//! let total = per_day.for_days(3).unwrap();
//! assert_eq!(total, Price::new(136.5).unwrap());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a float.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative or not finite.
    pub fn new(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::try_from(value)
            .map_err(|_| DomainError::invalid_price(format!("{value} is not representable")))?;
        Self::from_decimal(decimal)
    }

    /// Creates a price from a decimal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_price("price must not be negative"));
        }
        Ok(Self(value.normalize()))
    }

    /// Returns the decimal value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Multiplies a daily rate by a number of days.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result does not fit.
    pub fn for_days(&self, days: u32) -> ArithmeticResult<Self> {
        self.0.safe_mul(Decimal::from(days)).map(|v| Self(v.normalize()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
