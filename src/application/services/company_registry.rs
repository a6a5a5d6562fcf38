//! # Company Registry
//!
//! Lookup of rental companies by name.
//!
//! The registry is a thin application-level view over a
//! [`CompanyRepository`]. It keeps no cache: every call reads the repository,
//! so a company loaded by the manager is visible to the next broker call.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::value_objects::CompanyName;
use crate::infrastructure::inventory::Inventory;
use crate::infrastructure::persistence::{
    CompanyRepository, InMemoryCompanyRepository, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Registry of rental companies.
#[async_trait]
pub trait CompanyRegistry: Send + Sync + fmt::Debug {
    /// Looks up a company, returning `None` if it is not registered.
    ///
    /// Unlike the other methods this stays at the repository error layer:
    /// confirmation records the raw [`RepositoryError`](crate::infrastructure::persistence::RepositoryError)
    /// as a commit failure reason, and [`resolve`](Self::resolve) lifts it
    /// into [`ApplicationError`] for everyone else.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the lookup itself fails.
    async fn find(&self, name: &CompanyName) -> RepositoryResult<Option<Arc<dyn Inventory>>>;

    /// Returns every registered company, sorted by name.
    async fn all(&self) -> ApplicationResult<Vec<Arc<dyn Inventory>>>;

    /// Registers a new company.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` with a duplicate error if the
    /// name is already taken.
    async fn register(&self, inventory: Arc<dyn Inventory>) -> ApplicationResult<()>;

    /// Resolves a company by name.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownCompany` if no company has this name.
    async fn resolve(&self, name: &CompanyName) -> ApplicationResult<Arc<dyn Inventory>> {
        self.find(name)
            .await?
            .ok_or_else(|| ApplicationError::unknown_company(name))
    }

    /// Returns the names of every registered company.
    async fn all_names(&self) -> ApplicationResult<BTreeSet<CompanyName>> {
        Ok(self
            .all()
            .await?
            .iter()
            .map(|inventory| inventory.company().clone())
            .collect())
    }
}

/// [`CompanyRegistry`] backed by a [`CompanyRepository`].
#[derive(Debug, Clone)]
pub struct RepositoryCompanyRegistry {
    repository: Arc<dyn CompanyRepository>,
}

impl RepositoryCompanyRegistry {
    /// Creates a registry over a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    /// Creates a registry over a fresh in-memory repository.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCompanyRepository::new()))
    }
}

#[async_trait]
impl CompanyRegistry for RepositoryCompanyRegistry {
    async fn find(&self, name: &CompanyName) -> RepositoryResult<Option<Arc<dyn Inventory>>> {
        self.repository.get(name).await
    }

    async fn all(&self) -> ApplicationResult<Vec<Arc<dyn Inventory>>> {
        let mut companies = self.repository.find_all().await?;
        companies.sort_by(|a, b| a.company().cmp(b.company()));
        Ok(companies)
    }

    async fn register(&self, inventory: Arc<dyn Inventory>) -> ApplicationResult<()> {
        self.repository.save(inventory).await?;
        Ok(())
    }
}
