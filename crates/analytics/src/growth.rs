//! Trend estimation helpers.

use crate::config::AnalyticsConfig;
use crate::model::{HistoricalRecord, Significance};

/// Arithmetic mean of period-over-period relative change.
///
/// Pairs whose previous total is not positive are skipped. With no usable pair
/// (fewer than two records, or every previous total is zero) the rate is 0.
pub fn growth_rate_of(records: &[HistoricalRecord]) -> f64 {
    let (sum, count) = records
        .windows(2)
        .filter(|pair| pair[0].total > 0.0)
        .fold((0.0_f64, 0_usize), |(sum, count), pair| {
            let (previous, current) = (pair[0].total, pair[1].total);
            (sum + (current - previous) / previous, count + 1)
        });

    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Bracket a relative change (`0.07` = 7%) by magnitude.
pub fn significance_of(config: &AnalyticsConfig, change: f64) -> Significance {
    let magnitude = change.abs();
    if magnitude > config.significance_high {
        Significance::High
    } else if magnitude > config.significance_medium {
        Significance::Medium
    } else {
        Significance::Low
    }
}
