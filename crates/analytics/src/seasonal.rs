//! Static monthly seasonality.
//!
//! The table is a fixed simplification of typical demand, not a fitted model.

use crate::error::AnalyticsError;

/// Multiplier for `month_index` (0 = January).
///
/// Indices outside the table are rejected rather than wrapped.
pub fn seasonal_factor(factors: &[f64; 12], month_index: usize) -> Result<f64, AnalyticsError> {
    factors
        .get(month_index)
        .copied()
        .ok_or(AnalyticsError::IndexOutOfRange {
            index: month_index,
            len: factors.len(),
        })
}
