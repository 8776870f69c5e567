//! Inventory count domain.
//!
//! This crate turns a submitted count breakdown into report rows, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no spreadsheet).

pub mod expression;
pub mod item;
pub mod remarks;
pub mod row;

pub use expression::{CountEvaluation, EvalWarning, FallbackReason, Fragment, Op, Term, evaluate_count};
pub use item::InventoryItem;
pub use remarks::{FillColor, classify_remarks};
pub use row::{EvaluatedRow, build_row, build_rows};
