//! # Checked Arithmetic
//!
//! Overflow-checked arithmetic for rental prices.
//!
//! # Examples
//!
//! ```
//! use rental_broker::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let per_day = Decimal::new(4550, 2);
//! let total = per_day.safe_mul(Decimal::from(3)).unwrap();
//! assert_eq!(total, Decimal::new(13650, 2));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Implementors return `Err` instead of panicking on overflow.
pub trait CheckedArithmetic: Sized {
    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
    }

    #[test]
    fn decimal_mul_overflows() {
        assert_eq!(
            Decimal::MAX.safe_mul(Decimal::TWO),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn decimal_mul() {
        let a = Decimal::new(1050, 2);
        assert_eq!(a.safe_mul(Decimal::from(4)).unwrap(), Decimal::new(4200, 2));
    }
}
