//! # Quote Broker
//!
//! Fans reservation questions out to every registered rental company.
//!
//! This module provides the [`QuoteBroker`], which answers availability
//! questions by querying companies concurrently and creates quotes by asking
//! companies one at a time in name order until one accepts.
//!
//! # Selection Policy
//!
//! Quoting is first fit: the first company (by name) able to serve the
//! constraints wins, even if a later one would be cheaper. Callers after the
//! lowest price ask [`QuoteBroker::cheapest_car_type`] first.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::cart::QuoteCart;
use crate::application::services::company_registry::CompanyRegistry;
use crate::domain::entities::{CarType, Quote, ReservationConstraints};
use crate::domain::value_objects::{CompanyName, DateRange, RenterName};
use crate::infrastructure::inventory::{Inventory, InventoryError};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Configuration for the quote broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Maximum number of companies queried at once for availability.
    pub max_concurrent_queries: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_queries: 16,
        }
    }
}

impl BrokerConfig {
    /// Sets the concurrency cap for availability queries.
    #[must_use]
    pub fn with_max_concurrent_queries(mut self, max: usize) -> Self {
        self.max_concurrent_queries = max;
        self
    }
}

/// What one company answered to a quote request.
#[derive(Debug)]
pub(crate) enum CompanyOutcome {
    /// The company offered a quote.
    Quoted(Quote),
    /// The company could not serve the request.
    Declined {
        company: CompanyName,
        reason: InventoryError,
    },
}

/// Broker that collects availability and quotes from all companies.
#[derive(Debug, Clone)]
pub struct QuoteBroker {
    registry: Arc<dyn CompanyRegistry>,
    config: BrokerConfig,
}

impl QuoteBroker {
    /// Creates a new broker.
    #[must_use]
    pub fn new(registry: Arc<dyn CompanyRegistry>, config: BrokerConfig) -> Self {
        Self { registry, config }
    }

    /// Creates a broker with default configuration.
    #[must_use]
    pub fn with_defaults(registry: Arc<dyn CompanyRegistry>) -> Self {
        Self::new(registry, BrokerConfig::default())
    }

    /// Returns the registry the broker reads from.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn CompanyRegistry> {
        &self.registry
    }

    /// Returns the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }

    /// Returns the names of every registered company.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub async fn company_names(&self) -> ApplicationResult<BTreeSet<CompanyName>> {
        self.registry.all_names().await
    }

    /// Returns the car types available at any company for the period.
    ///
    /// Types are de-duplicated by name; when several companies offer the same
    /// type, the one from the first company in name order is kept. A company
    /// whose query fails contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    #[tracing::instrument(skip(self, period), fields(period = %period))]
    pub async fn available_car_types(&self, period: &DateRange) -> ApplicationResult<Vec<CarType>> {
        let companies = self.registry.all().await?;
        let per_company = self.query_available(&companies, period, None).await;
        Ok(merge_by_name(per_company))
    }

    /// Returns the cheapest car type available in a region for the period.
    ///
    /// Only companies serving `region` are considered; a company without
    /// region restrictions serves every region. The candidates are the same
    /// name-deduplicated union [`available_car_types`](Self::available_car_types)
    /// builds, so a type offered by several companies is priced by the first
    /// of them in name order. Ties go to the type seen first.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    #[tracing::instrument(skip(self, period), fields(period = %period))]
    pub async fn cheapest_car_type(
        &self,
        period: &DateRange,
        region: &str,
    ) -> ApplicationResult<Option<CarType>> {
        let companies = self.registry.all().await?;
        let per_company = self.query_available(&companies, period, Some(region)).await;

        let mut cheapest: Option<CarType> = None;
        for car_type in merge_by_name(per_company) {
            let better = cheapest
                .as_ref()
                .is_none_or(|best| car_type.price_per_day() < best.price_per_day());
            if better {
                cheapest = Some(car_type);
            }
        }
        Ok(cheapest)
    }

    /// Creates a quote at the first company able to serve the constraints
    /// and appends it to the cart.
    ///
    /// Companies are asked one at a time in name order; once one succeeds
    /// the rest are not asked.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoQuoteAvailable` if every company declines
    /// or none is registered. The cart is left unchanged.
    #[tracing::instrument(skip(self, cart, renter, constraints), fields(renter = %renter, constraints = %constraints))]
    pub async fn create_quote(
        &self,
        cart: &mut QuoteCart,
        renter: &RenterName,
        constraints: &ReservationConstraints,
    ) -> ApplicationResult<Quote> {
        let companies = self.registry.all().await?;

        for inventory in &companies {
            match ask_for_quote(inventory.as_ref(), constraints, renter).await {
                CompanyOutcome::Quoted(quote) => {
                    info!(
                        quote_id = %quote.id(),
                        company = %quote.company(),
                        price = %quote.rental_price(),
                        "quote created"
                    );
                    cart.push(quote.clone());
                    return Ok(quote);
                }
                CompanyOutcome::Declined { company, reason } => {
                    debug!(company = %company, reason = %reason, "company declined to quote");
                }
            }
        }

        Err(ApplicationError::no_quote_available(companies.len()))
    }

    /// Queries companies concurrently, keeping results in company order.
    async fn query_available(
        &self,
        companies: &[Arc<dyn Inventory>],
        period: &DateRange,
        region: Option<&str>,
    ) -> Vec<Vec<CarType>> {
        let limit = self.config.max_concurrent_queries.max(1);

        stream::iter(companies.iter().map(|inventory| async move {
            if let Some(region) = region {
                if !inventory.operates_in(region).await {
                    return Vec::new();
                }
            }
            match inventory.available_car_types(period).await {
                Ok(mut types) => {
                    types.sort_by(|a, b| a.name().cmp(b.name()));
                    types
                }
                Err(e) => {
                    warn!(company = %inventory.company(), error = %e, "availability query failed");
                    Vec::new()
                }
            }
        }))
        .buffered(limit)
        .collect()
        .await
    }
}

async fn ask_for_quote(
    inventory: &dyn Inventory,
    constraints: &ReservationConstraints,
    renter: &RenterName,
) -> CompanyOutcome {
    match inventory.quote(constraints, renter).await {
        Ok(quote) => CompanyOutcome::Quoted(quote),
        Err(reason) => CompanyOutcome::Declined {
            company: inventory.company().clone(),
            reason,
        },
    }
}

/// Flattens per-company type lists, keeping the first type of each name.
fn merge_by_name(per_company: Vec<Vec<CarType>>) -> Vec<CarType> {
    let mut seen = BTreeSet::new();
    per_company
        .into_iter()
        .flatten()
        .filter(|t| seen.insert(t.name().to_string()))
        .collect()
}
