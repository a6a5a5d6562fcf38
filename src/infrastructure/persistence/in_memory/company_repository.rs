//! # In-Memory Company Repository
//!
//! In-memory implementation of [`CompanyRepository`].
//!
//! Companies are kept in a `BTreeMap` keyed by name, so listing them is
//! already in name order.

use crate::domain::value_objects::CompanyName;
use crate::infrastructure::inventory::Inventory;
use crate::infrastructure::persistence::traits::{
    CompanyRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`CompanyRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryCompanyRepository {
    storage: Arc<RwLock<BTreeMap<CompanyName, Arc<dyn Inventory>>>>,
}

impl InMemoryCompanyRepository {
    /// Creates a new empty in-memory company repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Returns the number of companies in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all companies from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn save(&self, inventory: Arc<dyn Inventory>) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        let name = inventory.company().clone();
        if storage.contains_key(&name) {
            return Err(RepositoryError::duplicate("RentalCompany", name.as_str()));
        }
        storage.insert(name, inventory);
        Ok(())
    }

    async fn get(&self, name: &CompanyName) -> RepositoryResult<Option<Arc<dyn Inventory>>> {
        let storage = self.storage.read().await;
        Ok(storage.get(name).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Arc<dyn Inventory>>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn delete(&self, name: &CompanyName) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(name).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
