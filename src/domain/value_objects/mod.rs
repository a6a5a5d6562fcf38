//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`QuoteId`], [`ReservationId`]: UUID-based identifiers
//! - [`CompanyName`], [`RenterName`]: validated string identities
//! - [`CarId`]: per-company car number
//!
//! ## Rental Values
//!
//! - [`DateRange`]: half-open rental period
//! - [`Price`]: non-negative decimal amount
//! - [`Timestamp`]: UTC point in time
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations

pub mod arithmetic;
pub mod date_range;
pub mod ids;
pub mod price;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use date_range::DateRange;
pub use ids::{CarId, CompanyName, QuoteId, RenterName, ReservationId};
pub use price::Price;
pub use timestamp::Timestamp;
