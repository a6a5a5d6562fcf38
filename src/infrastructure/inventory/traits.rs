//! # Inventory Trait
//!
//! Port definition for a rental company's inventory.
//!
//! This module defines the [`Inventory`] trait that every company backend
//! implements. It gives the broker a uniform way to ask for availability,
//! request quotes and commit them, plus the read-side queries used by
//! reporting.
//!
//! # Examples
//!
//! ```ignore
//! use rental_broker::infrastructure::inventory::traits::Inventory;
//! use rental_broker::infrastructure::inventory::error::InventoryResult;
//!
//! // Implement Inventory for your company backend
//! struct MyInventory { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl Inventory for MyInventory {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{CarType, Quote, Reservation, ReservationConstraints};
use crate::domain::value_objects::{CarId, CompanyName, DateRange, RenterName};
use crate::infrastructure::inventory::error::InventoryResult;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fmt;

/// Trait defining the capability of one company's inventory.
///
/// # Error Handling
///
/// Methods return `InventoryResult<T>`. Implementations map backend-specific
/// failures to the matching `InventoryError` variant: `NoMatch` when a quote
/// cannot be offered, `Unavailable` when a commit loses its car, `Timeout`
/// when the backend does not answer in time.
///
/// # Atomicity
///
/// [`commit`](Inventory::commit) must check availability and record the
/// reservation as one step; concurrent commits for the last free car must not
/// both succeed.
#[async_trait]
pub trait Inventory: Send + Sync + fmt::Debug {
    /// Returns the company this inventory belongs to.
    fn company(&self) -> &CompanyName;

    /// Returns the car types with at least one car free for the period.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn available_car_types(&self, period: &DateRange) -> InventoryResult<Vec<CarType>>;

    /// Prices a quote for the constraints without reserving anything.
    ///
    /// # Errors
    ///
    /// - `InventoryError::NoMatch` - Region not served, unknown type, or no free car
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn quote(
        &self,
        constraints: &ReservationConstraints,
        renter: &RenterName,
    ) -> InventoryResult<Quote>;

    /// Turns a quote into a reservation by assigning a free car.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Unavailable` - No car of the type is free any more
    /// - `InventoryError::NoMatch` - The quote belongs to another company
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn commit(&self, quote: &Quote) -> InventoryResult<Reservation>;

    /// Returns the regions served, or `None` if the company is unrestricted.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn regions(&self) -> InventoryResult<Option<BTreeSet<String>>>;

    /// Returns every car type of the company.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn all_types(&self) -> InventoryResult<Vec<CarType>>;

    /// Returns every reservation held by the company.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn reservations(&self) -> InventoryResult<Vec<Reservation>>;

    /// Returns the reservations made by one renter.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Timeout` - Backend did not answer in time
    async fn reservations_by(&self, renter: &RenterName) -> InventoryResult<Vec<Reservation>>;

    /// Returns the ids of the cars of a type.
    ///
    /// # Errors
    ///
    /// - `InventoryError::UnknownCarType` - The company has no such type
    async fn car_ids(&self, car_type: &str) -> InventoryResult<Vec<CarId>>;

    /// Returns the reservations made against one car.
    ///
    /// # Errors
    ///
    /// - `InventoryError::UnknownCar` - The company has no such car
    async fn reservations_for_car(&self, car_id: CarId) -> InventoryResult<Vec<Reservation>>;

    /// Returns true if the company serves the region.
    ///
    /// Default implementation reads [`regions`](Inventory::regions); a
    /// failed lookup counts as "not served".
    async fn operates_in(&self, region: &str) -> bool {
        match self.regions().await {
            Ok(None) => true,
            Ok(Some(served)) => served.contains(region),
            Err(_) => false,
        }
    }
}
