//! `countsheet-core` — shared building blocks.
//!
//! This crate contains **pure** primitives (no HTTP, no spreadsheet IO).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
