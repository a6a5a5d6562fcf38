//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur while brokering quotes,
//! confirming carts and reporting, including usage errors, lookup failures
//! and errors bubbling up from the infrastructure ports.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)           - Invalid values
//! ├── Inventory(InventoryError)     - Company backend failures
//! ├── Repository(RepositoryError)   - Registry storage failures
//! ├── Fleet(FleetError)             - Fleet file failures
//! ├── RenterAlreadySet              - Session usage error
//! ├── UnknownCompany                - Registry lookup failure
//! ├── NoQuoteAvailable              - Every company declined
//! ├── ConfirmationFailed            - A commit failed mid-cart
//! └── Validation(String)            - Input validation failures
//! ```
//!
//! # Examples
//!
//! ```
//! use rental_broker::application::error::ApplicationError;
//!
//! let err = ApplicationError::unknown_company("Budget");
//! assert!(err.is_not_found());
//!
//! let err = ApplicationError::validation("start must be before end");
//! assert!(err.is_validation());
//! ```

use crate::domain::entities::{Quote, Reservation};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::CompanyName;
use crate::infrastructure::fleet::FleetError;
use crate::infrastructure::inventory::InventoryError;
use crate::infrastructure::persistence::RepositoryError;
use std::fmt;
use thiserror::Error;

/// Why a single commit inside a confirmation failed.
#[derive(Debug, Clone, Error)]
pub enum CommitFailure {
    /// The quote's company is no longer registered.
    #[error("company is not registered")]
    UnknownCompany,

    /// The company's inventory refused or failed the commit.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The registry could not be read.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Details of a confirmation that stopped part-way through a cart.
///
/// Confirmation is not atomic: `committed` holds the reservations that were
/// made before the failure and remain in force.
#[derive(Debug, Clone)]
pub struct ConfirmationFailure {
    /// Cart position of the quote that failed.
    pub index: usize,
    /// The quote that could not be committed.
    pub quote: Quote,
    /// Company the quote belongs to.
    pub company: CompanyName,
    /// What went wrong.
    pub reason: CommitFailure,
    /// Reservations already committed, in cart order.
    pub committed: Vec<Reservation>,
}

impl fmt::Display for ConfirmationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quote #{} at {} failed: {} ({} reservation(s) already committed)",
            self.index,
            self.company,
            self.reason,
            self.committed.len()
        )
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from value validation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Inventory error from a company backend.
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Repository error from the company registry.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Fleet file could not be loaded.
    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    /// The session's renter was already set.
    #[error("renter already set: {0}")]
    RenterAlreadySet(String),

    /// No company is registered under this name.
    #[error("unknown company: {0}")]
    UnknownCompany(String),

    /// Every company declined to quote.
    #[error("no quote available from {companies_asked} company(ies)")]
    NoQuoteAvailable {
        /// Number of companies that were asked.
        companies_asked: usize,
    },

    /// A commit failed while confirming a cart.
    #[error("confirmation failed: {0}")]
    ConfirmationFailed(Box<ConfirmationFailure>),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a renter already set error.
    #[must_use]
    pub fn renter_already_set(renter: impl fmt::Display) -> Self {
        Self::RenterAlreadySet(renter.to_string())
    }

    /// Creates an unknown company error.
    #[must_use]
    pub fn unknown_company(name: impl fmt::Display) -> Self {
        Self::UnknownCompany(name.to_string())
    }

    /// Creates a no quote available error.
    #[must_use]
    pub fn no_quote_available(companies_asked: usize) -> Self {
        Self::NoQuoteAvailable { companies_asked }
    }

    /// Creates a confirmation failed error.
    #[must_use]
    pub fn confirmation_failed(failure: ConfirmationFailure) -> Self {
        Self::ConfirmationFailed(Box::new(failure))
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the failure details if this is a confirmation failure.
    #[must_use]
    pub fn confirmation_failure(&self) -> Option<&ConfirmationFailure> {
        match self {
            Self::ConfirmationFailed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// A failed confirmation is never retryable: part of the cart may
    /// already be committed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Inventory(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::UnknownCompany(_) => true,
            Self::Repository(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }

    /// Returns true if the session was used incorrectly.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::RenterAlreadySet(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DateRange, Price, RenterName};
    use chrono::NaiveDate;

    fn quote() -> Quote {
        Quote::new(
            RenterName::new("ann").unwrap(),
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            )
            .unwrap(),
            CompanyName::new("Hertz").unwrap(),
            "Van",
            Price::new(240.0).unwrap(),
        )
    }

    #[test]
    fn renter_already_set() {
        let err = ApplicationError::renter_already_set("ann");
        assert!(err.is_usage_error());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("ann"));
    }

    #[test]
    fn unknown_company_is_not_found() {
        let err = ApplicationError::unknown_company("Budget");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Budget"));
    }

    #[test]
    fn no_quote_available() {
        let err = ApplicationError::no_quote_available(3);
        assert!(err.to_string().contains('3'));
        assert!(!err.is_not_found());
    }

    #[test]
    fn confirmation_failed_carries_details() {
        let q = quote();
        let err = ApplicationError::confirmation_failed(ConfirmationFailure {
            index: 2,
            quote: q.clone(),
            company: q.company().clone(),
            reason: CommitFailure::Inventory(InventoryError::unavailable("no Van")),
            committed: vec![],
        });

        let failure = err.confirmation_failure().unwrap();
        assert_eq!(failure.index, 2);
        assert_eq!(failure.quote.id(), q.id());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("quote #2 at Hertz"));
    }

    #[test]
    fn from_inventory_error_keeps_retryability() {
        let err: ApplicationError = InventoryError::timeout("slow").into();
        assert!(err.is_retryable());
    }

    #[test]
    fn from_domain_error_is_validation() {
        let err: ApplicationError = DomainError::invalid_date_range("backwards").into();
        assert!(err.is_validation());
    }

    #[test]
    fn from_repository_error() {
        let err: ApplicationError = RepositoryError::not_found("RentalCompany", "Avis").into();
        assert!(err.is_not_found());
    }
}
