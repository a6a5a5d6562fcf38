//! # Domain Layer
//!
//! Rental vocabulary: value objects, entities and the errors raised when
//! their invariants are violated. Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
