//! # In-Memory Inventory
//!
//! [`Inventory`] implementation backed by a [`RentalCompany`] held in memory.
//!
//! The company sits behind a tokio `RwLock`: queries take the read guard,
//! commits take the write guard for the whole check-and-reserve step so two
//! renters can never get the same car for overlapping periods.

use crate::domain::entities::{CarType, Quote, RentalCompany, Reservation, ReservationConstraints};
use crate::domain::value_objects::{CarId, CompanyName, DateRange, RenterName};
use crate::infrastructure::inventory::error::{InventoryError, InventoryResult};
use crate::infrastructure::inventory::traits::Inventory;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`Inventory`].
#[derive(Debug, Clone)]
pub struct InMemoryInventory {
    company: CompanyName,
    state: Arc<RwLock<RentalCompany>>,
}

impl InMemoryInventory {
    /// Wraps a rental company.
    #[must_use]
    pub fn new(company: RentalCompany) -> Self {
        Self {
            company: company.name().clone(),
            state: Arc::new(RwLock::new(company)),
        }
    }

    /// Returns a copy of the current company state.
    pub async fn snapshot(&self) -> RentalCompany {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl Inventory for InMemoryInventory {
    fn company(&self) -> &CompanyName {
        &self.company
    }

    async fn available_car_types(&self, period: &DateRange) -> InventoryResult<Vec<CarType>> {
        let state = self.state.read().await;
        Ok(state.available_car_types(period))
    }

    async fn quote(
        &self,
        constraints: &ReservationConstraints,
        renter: &RenterName,
    ) -> InventoryResult<Quote> {
        let state = self.state.read().await;
        state
            .create_quote(constraints, renter)
            .map_err(InventoryError::from_quote_rejection)
    }

    async fn commit(&self, quote: &Quote) -> InventoryResult<Reservation> {
        let mut state = self.state.write().await;
        state
            .confirm_quote(quote)
            .map_err(InventoryError::from_commit_rejection)
    }

    async fn regions(&self) -> InventoryResult<Option<BTreeSet<String>>> {
        let state = self.state.read().await;
        Ok(state.regions().cloned())
    }

    async fn all_types(&self) -> InventoryResult<Vec<CarType>> {
        let state = self.state.read().await;
        Ok(state.car_types().cloned().collect())
    }

    async fn reservations(&self) -> InventoryResult<Vec<Reservation>> {
        let state = self.state.read().await;
        Ok(state.reservations())
    }

    async fn reservations_by(&self, renter: &RenterName) -> InventoryResult<Vec<Reservation>> {
        let state = self.state.read().await;
        Ok(state.reservations_by(renter))
    }

    async fn car_ids(&self, car_type: &str) -> InventoryResult<Vec<CarId>> {
        let state = self.state.read().await;
        if state.car_type(car_type).is_none() {
            return Err(InventoryError::unknown_car_type(
                self.company.clone(),
                car_type,
            ));
        }
        Ok(state.cars_of_type(car_type).map(|c| c.id()).collect())
    }

    async fn reservations_for_car(&self, car_id: CarId) -> InventoryResult<Vec<Reservation>> {
        let state = self.state.read().await;
        state
            .car(car_id)
            .map(|c| c.reservations().to_vec())
            .ok_or_else(|| InventoryError::unknown_car(self.company.clone(), car_id))
    }
}
