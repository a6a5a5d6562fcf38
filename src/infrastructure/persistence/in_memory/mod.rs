//! # In-Memory Repositories
//!
//! In-memory implementations used by the CLI and by tests.
//!
//! - [`InMemoryCompanyRepository`]: rental company registry storage
//!
//! ## Thread Safety
//!
//! Storage sits behind `Arc<RwLock<..>>`; clones share the same map.

pub mod company_repository;

pub use company_repository::InMemoryCompanyRepository;
