//! # Application Layer
//!
//! Use-case orchestration on top of the domain and the infrastructure ports.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, CommitFailure, ConfirmationFailure};
