//! # Inventory Port
//!
//! The per-company inventory capability and its in-memory implementation.
//!
//! - [`Inventory`]: async trait every company backend implements
//! - [`InMemoryInventory`]: lock-guarded in-memory company
//! - [`InventoryError`]: what a backend reports when it cannot serve

pub mod error;
pub mod in_memory;
pub mod traits;

pub use error::{InventoryError, InventoryResult};
pub use in_memory::InMemoryInventory;
pub use traits::Inventory;
