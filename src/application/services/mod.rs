//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`QuoteBroker`]: availability fan-out and first-fit quoting
//! - [`ConfirmationCoordinator`]: non-atomic cart confirmation
//! - [`ReservationSession`]: one renter's booking conversation
//! - [`CompanyRegistry`]: company lookup by name
//! - [`ManagerService`]: reporting and fleet loading

pub mod cart;
pub mod company_registry;
pub mod confirmation;
pub mod quote_broker;
pub mod reporting;
pub mod session;

pub use cart::QuoteCart;
pub use company_registry::{CompanyRegistry, RepositoryCompanyRegistry};
pub use confirmation::ConfirmationCoordinator;
pub use quote_broker::{BrokerConfig, QuoteBroker};
pub use reporting::ManagerService;
pub use session::ReservationSession;
