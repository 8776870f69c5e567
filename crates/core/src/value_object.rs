//! Value object trait: equality by value, not identity.
//!
//! Everything derived from a count submission (evaluated fragments, report
//! rows) is a value object: built once, never mutated, compared by value.

/// Marker trait for value objects.
///
/// Two value objects with the same attribute values are equal. To "modify"
/// one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Total(f64);
///
/// impl ValueObject for Total {}
///
/// assert_eq!(Total(8.0), Total(8.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
