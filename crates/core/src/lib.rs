//! `ledgerscope-core` — shared building blocks.
//!
//! This crate contains **pure** primitives (no infrastructure concerns): tenant
//! identity, the value-object marker, the domain error model and the clock
//! abstraction used to keep date-relative calculations deterministic.

pub mod clock;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::TenantId;
pub use value_object::ValueObject;
