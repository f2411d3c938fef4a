//! Value object trait: equality by value, not identity.
//!
//! Analytics inputs and outputs (historical records, forecast points, insights,
//! whole analysis results) carry no identity: two instances with the same field
//! values are the same observation.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. The analytics
/// engine never mutates its inputs and builds a fresh result per call, so every
/// type crossing its boundary implements this marker.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct ConfidenceInterval {
///     lower: f64,
///     upper: f64,
/// }
///
/// impl ValueObject for ConfidenceInterval {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
