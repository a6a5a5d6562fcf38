//! # Infrastructure Layer
//!
//! Adapters behind the application's ports.
//!
//! - [`inventory`]: per-company inventory capability and its in-memory backend
//! - [`persistence`]: company repository
//! - [`fleet`]: fleet data file loader

pub mod fleet;
pub mod inventory;
pub mod persistence;
