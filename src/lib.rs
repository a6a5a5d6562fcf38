//! # Rental Broker
//!
//! Car-rental quote aggregation across independent rental companies.
//!
//! A renter opens a [`ReservationSession`](application::services::ReservationSession),
//! asks the [`QuoteBroker`](application::services::QuoteBroker) for quotes
//! (each request fans out to every registered company), and finally confirms
//! the whole cart through the
//! [`ConfirmationCoordinator`](application::services::ConfirmationCoordinator).
//! Confirmation commits quotes one by one and is not atomic across
//! companies.
//!
//! ## Layers
//!
//! - [`domain`]: value objects, entities and domain errors
//! - [`application`]: broker, coordinator, session, registry and reporting
//! - [`infrastructure`]: inventory port, company repository, fleet loader
//! - [`config`] and [`telemetry`]: settings and tracing setup
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use rental_broker::application::services::{
//!     CompanyRegistry, ConfirmationCoordinator, QuoteBroker, RepositoryCompanyRegistry,
//!     ReservationSession,
//! };
//! use rental_broker::domain::entities::ReservationConstraints;
//! use rental_broker::domain::value_objects::{DateRange, RenterName};
//! use rental_broker::infrastructure::fleet::FleetLoader;
//!
//! # tokio_test::block_on(async {
//! let registry: Arc<dyn CompanyRegistry> = Arc::new(RepositoryCompanyRegistry::in_memory());
//! let hertz = FleetLoader::parse("-Hertz,north\nCompact,4,300,40,false,1\n")
//!     .unwrap()
//!     .into_inventory()
//!     .unwrap();
//! registry.register(Arc::new(hertz)).await.unwrap();
//!
//! let mut session = ReservationSession::new(
//!     Arc::new(QuoteBroker::with_defaults(registry.clone())),
//!     Arc::new(ConfirmationCoordinator::new(registry)),
//! );
//! let renter = RenterName::new("ann").unwrap();
//! session.set_renter(renter.clone()).unwrap();
//!
//! let period = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//! )
//! .unwrap();
//! let constraints = ReservationConstraints::new(period, "Compact", Some("north")).unwrap();
//! session.create_quote(&renter, &constraints).await.unwrap();
//!
//! let reservations = session.confirm_quotes().await.unwrap();
//! assert_eq!(reservations.len(), 1);
//! assert!(session.current_quotes().is_empty());
//! # });
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
