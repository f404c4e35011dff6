//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod clock;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, Key, SupplierId};
pub use value_object::ValueObject;
