//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The broker never holds company handles of its own: every lookup goes
//! through a [`CompanyRepository`], so companies registered after startup are
//! visible to the next call.
//!
//! # Examples
//!
//! ```ignore
//! use rental_broker::infrastructure::persistence::traits::CompanyRepository;
//!
//! async fn list(repo: &impl CompanyRepository) {
//!     for inventory in repo.find_all().await.unwrap() {
//!         println!("{}", inventory.company());
//!     }
//! }
//! ```

use crate::domain::value_objects::CompanyName;
use crate::infrastructure::inventory::Inventory;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Storage backend failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository of rental company inventories, keyed by company name.
#[async_trait]
pub trait CompanyRepository: Send + Sync + fmt::Debug {
    /// Stores a new company.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the name is already taken;
    /// the existing entry is left untouched.
    async fn save(&self, inventory: Arc<dyn Inventory>) -> RepositoryResult<()>;

    /// Gets a company by name.
    ///
    /// Returns `None` if the company does not exist.
    async fn get(&self, name: &CompanyName) -> RepositoryResult<Option<Arc<dyn Inventory>>>;

    /// Gets all companies, sorted by name.
    async fn find_all(&self) -> RepositoryResult<Vec<Arc<dyn Inventory>>>;

    /// Deletes a company by name.
    ///
    /// Returns `Ok(true)` if the company was deleted, `Ok(false)` if it didn't exist.
    async fn delete(&self, name: &CompanyName) -> RepositoryResult<bool>;

    /// Counts all companies.
    async fn count(&self) -> RepositoryResult<u64>;
}
