//! # Domain Errors
//!
//! Errors raised when a domain value or entity would violate its invariants.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Date range is empty or inverted.
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    /// Price is negative or otherwise unusable.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Identifier (company, renter, car type) is malformed.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Car type definition is malformed.
    #[error("invalid car type: {0}")]
    InvalidCarType(String),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid date range error.
    #[must_use]
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::InvalidDateRange(message.into())
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Creates an invalid car type error.
    #[must_use]
    pub fn invalid_car_type(message: impl Into<String>) -> Self {
        Self::InvalidCarType(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
