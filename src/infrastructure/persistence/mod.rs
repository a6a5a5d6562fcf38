//! # Persistence Layer
//!
//! Repository ports and their implementations.
//!
//! - [`CompanyRepository`]: storage for rental company inventories
//! - `in_memory`: in-memory implementations

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryCompanyRepository;
pub use traits::{CompanyRepository, RepositoryError, RepositoryResult};
