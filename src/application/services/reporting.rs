//! # Manager Service
//!
//! Read-side reporting over the registered companies, plus loading new
//! companies from fleet files.
//!
//! Every query resolves companies through the registry at call time.

use crate::application::error::ApplicationResult;
use crate::application::services::company_registry::CompanyRegistry;
use crate::domain::entities::CarType;
use crate::domain::value_objects::{CarId, CompanyName, RenterName};
use crate::infrastructure::fleet::{FleetError, FleetLoader};
use crate::infrastructure::inventory::Inventory;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Reporting and administration over rental companies.
#[derive(Debug, Clone)]
pub struct ManagerService {
    registry: Arc<dyn CompanyRegistry>,
}

impl ManagerService {
    /// Creates a manager service over the registry.
    #[must_use]
    pub fn new(registry: Arc<dyn CompanyRegistry>) -> Self {
        Self { registry }
    }

    /// Returns a company's car types, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownCompany` if the company is missing.
    pub async fn car_types(&self, company: &CompanyName) -> ApplicationResult<Vec<CarType>> {
        let inventory = self.registry.resolve(company).await?;
        let mut types = inventory.all_types().await?;
        types.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(types)
    }

    /// Returns the ids of a company's cars of one type.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownCompany` if the company is missing,
    /// or an inventory error if the type is unknown.
    pub async fn car_ids(
        &self,
        company: &CompanyName,
        car_type: &str,
    ) -> ApplicationResult<Vec<CarId>> {
        let inventory = self.registry.resolve(company).await?;
        Ok(inventory.car_ids(car_type).await?)
    }

    /// Returns the number of reservations made against one car.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownCompany` if the company is missing,
    /// or an inventory error if the car is unknown.
    pub async fn reservation_count_for_car(
        &self,
        company: &CompanyName,
        car_id: CarId,
    ) -> ApplicationResult<usize> {
        let inventory = self.registry.resolve(company).await?;
        Ok(inventory.reservations_for_car(car_id).await?.len())
    }

    /// Returns the number of reservations for one car type of a company.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownCompany` if the company is missing,
    /// or an inventory error if the type is unknown.
    pub async fn reservation_count_for_type(
        &self,
        company: &CompanyName,
        car_type: &str,
    ) -> ApplicationResult<usize> {
        let inventory = self.registry.resolve(company).await?;
        inventory.car_ids(car_type).await?;
        let reservations = inventory.reservations().await?;
        Ok(reservations
            .iter()
            .filter(|r| r.car_type() == car_type)
            .count())
    }

    /// Returns the number of reservations a renter holds across all companies.
    ///
    /// # Errors
    ///
    /// Returns an error if a company cannot be read.
    pub async fn reservation_count_for_renter(&self, renter: &RenterName) -> ApplicationResult<usize> {
        let mut total = 0;
        for inventory in self.registry.all().await? {
            total += inventory.reservations_by(renter).await?.len();
        }
        Ok(total)
    }

    /// Returns the renters tied for the most reservations across all
    /// companies. Empty if nobody has reserved anything.
    ///
    /// # Errors
    ///
    /// Returns an error if a company cannot be read.
    pub async fn best_clients(&self) -> ApplicationResult<BTreeSet<RenterName>> {
        let mut counts: BTreeMap<RenterName, usize> = BTreeMap::new();
        for inventory in self.registry.all().await? {
            for reservation in inventory.reservations().await? {
                *counts.entry(reservation.renter().clone()).or_default() += 1;
            }
        }

        let Some(max) = counts.values().copied().max() else {
            return Ok(BTreeSet::new());
        };
        Ok(counts
            .into_iter()
            .filter(|(_, count)| *count == max)
            .map(|(renter, _)| renter)
            .collect())
    }

    /// Returns the company's car type with the most reservations starting
    /// in `year`.
    ///
    /// Types without reservations take part, so a company with types always
    /// yields one. Ties go to the first type in name order.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownCompany` if the company is missing.
    pub async fn most_popular_car_type_in(
        &self,
        company: &CompanyName,
        year: i32,
    ) -> ApplicationResult<Option<CarType>> {
        let types = self.car_types(company).await?;
        let inventory = self.registry.resolve(company).await?;
        let reservations = inventory.reservations().await?;

        let mut best: Option<(CarType, usize)> = None;
        for car_type in types {
            let count = reservations
                .iter()
                .filter(|r| r.car_type() == car_type.name() && r.period().start_year() == year)
                .count();
            if best.as_ref().is_none_or(|(_, top)| count > *top) {
                best = Some((car_type, count));
            }
        }
        Ok(best.map(|(car_type, _)| car_type))
    }

    /// Loads a fleet file and registers the company it describes.
    ///
    /// Nothing is registered if the file cannot be read or parsed, or if the
    /// company name is already taken.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Fleet` for unreadable or malformed files and
    /// `ApplicationError::Repository` for a duplicate name.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn load_rental(&self, path: impl AsRef<Path>) -> ApplicationResult<CompanyName> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FleetError::io(path, e))?;
        let data = FleetLoader::parse(&content)?;
        let cars = data.cars.len();
        let inventory = data.into_inventory()?;
        let name = inventory.company().clone();

        self.registry.register(Arc::new(inventory)).await?;
        info!(company = %name, cars, "fleet loaded");
        Ok(name)
    }
}
