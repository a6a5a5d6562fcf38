//! # Inventory Errors
//!
//! Error types for inventory operations.
//!
//! A company's inventory reports why it could not quote or commit. The broker
//! treats quoting errors as "no offer from this company"; the confirmation
//! coordinator treats commit errors as fatal for the whole confirmation.
//!
//! # Examples
//!
//! ```
//! use rental_broker::infrastructure::inventory::error::InventoryError;
//!
//! let error = InventoryError::timeout("commit took too long");
//! assert!(error.is_retryable());
//!
//! let error = InventoryError::no_match("no Van in region south");
//! assert!(!error.is_retryable());
//! ```

use crate::domain::entities::RentalRejection;
use crate::domain::value_objects::{CarId, CompanyName};
use thiserror::Error;

/// Error type for inventory operations.
#[derive(Debug, Clone, Error)]
pub enum InventoryError {
    /// The company has no offer for the constraints.
    #[error("inventory no match: {message}")]
    NoMatch {
        /// Error message.
        message: String,
    },

    /// No car is free any more for the quoted period.
    #[error("inventory unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// The company does not know the car type.
    #[error("inventory unknown car type: {company} has no {car_type}")]
    UnknownCarType {
        /// The company asked.
        company: CompanyName,
        /// The requested type.
        car_type: String,
    },

    /// The company does not know the car.
    #[error("inventory unknown car: {company} has no car {car_id}")]
    UnknownCar {
        /// The company asked.
        company: CompanyName,
        /// The requested car.
        car_id: CarId,
    },

    /// The inventory did not answer in time.
    #[error("inventory timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Internal inventory error.
    #[error("inventory internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl InventoryError {
    /// Creates a no match error.
    #[must_use]
    pub fn no_match(message: impl Into<String>) -> Self {
        Self::NoMatch {
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates an unknown car type error.
    #[must_use]
    pub fn unknown_car_type(company: CompanyName, car_type: impl Into<String>) -> Self {
        Self::UnknownCarType {
            company,
            car_type: car_type.into(),
        }
    }

    /// Creates an unknown car error.
    #[must_use]
    pub fn unknown_car(company: CompanyName, car_id: CarId) -> Self {
        Self::UnknownCar { company, car_id }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Maps a rejection raised while quoting.
    ///
    /// Every quoting rejection means "no offer here".
    #[must_use]
    pub fn from_quote_rejection(rejection: RentalRejection) -> Self {
        match rejection {
            RentalRejection::Pricing(e) => Self::internal(e.to_string()),
            other => Self::no_match(other.to_string()),
        }
    }

    /// Maps a rejection raised while committing.
    #[must_use]
    pub fn from_commit_rejection(rejection: RentalRejection) -> Self {
        match rejection {
            RentalRejection::NoCarAvailable { .. } => Self::unavailable(rejection.to_string()),
            RentalRejection::UnknownCarType { company, car_type } => {
                Self::unknown_car_type(company, car_type)
            }
            RentalRejection::Pricing(e) => Self::internal(e.to_string()),
            other => Self::no_match(other.to_string()),
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// Retryable errors are transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns true if the company simply has nothing to offer.
    #[must_use]
    pub fn is_no_offer(&self) -> bool {
        matches!(
            self,
            Self::NoMatch { .. } | Self::Unavailable { .. } | Self::UnknownCarType { .. }
        )
    }
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
