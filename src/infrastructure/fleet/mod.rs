//! # Fleet Data
//!
//! Loading rental companies from fleet data files.

pub mod error;
pub mod loader;

pub use error::{FleetError, FleetResult};
pub use loader::{FleetData, FleetLoader, MAX_CARS};
