//! Tunable constants of the analytics engine.
//!
//! Every threshold, confidence score and band multiplier lives here so callers
//! (and tests) can override them without touching the algorithms. Hosts usually
//! keep the defaults and override a handful of keys from JSON.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Typical monthly demand multipliers, January first, peaking at year-end.
pub const DEFAULT_SEASONAL_FACTORS: [f64; 12] =
    [0.9, 0.9, 1.0, 1.0, 1.05, 1.0, 0.95, 0.95, 1.0, 1.1, 1.2, 1.4];

/// A `[lower, upper]` pair (band multipliers or clamp bounds).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    fn check(&self, name: &str) -> Result<(), AnalyticsError> {
        if !(self.lower.is_finite() && self.upper.is_finite()) {
            return Err(AnalyticsError::invalid_config(format!(
                "{name} must be finite"
            )));
        }
        if self.lower > self.upper {
            return Err(AnalyticsError::invalid_config(format!(
                "{name}: lower ({}) must not exceed upper ({})",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    // Sales forecasting.
    /// Trailing records used to estimate the current growth rate.
    pub recent_window_size: usize,
    /// Seed value when there is no history at all.
    pub fallback_base_value: f64,
    pub seasonal_factors: [f64; 12],
    pub sales_band: Bounds,
    /// Growth rate below which a decline alert fires.
    pub decline_alert_threshold: f64,
    pub strong_growth_threshold: f64,
    /// `|change|` above which a trend is highly significant.
    pub significance_high: f64,
    pub significance_medium: f64,
    pub trend_confidence: f64,
    pub decline_alert_confidence: f64,
    /// Longest accepted forecast horizon (compounding overflows past a point).
    pub max_horizon_months: u32,

    // Inventory.
    /// Quantities strictly below this are low stock.
    pub low_stock_threshold: u64,
    /// Quantities strictly above this are overstock.
    pub over_stock_threshold: u64,
    /// Low-stock counts above this escalate the alert to high severity.
    pub low_stock_high_severity_count: usize,
    pub low_stock_confidence: f64,
    pub over_stock_confidence: f64,
    pub inventory_turnover: f64,
    pub inventory_band: Bounds,

    // Debt collection.
    pub default_collection_days: f64,
    pub collection_age_horizon_days: f64,
    pub collection_amount_scale: f64,
    pub collection_probability_bounds: Bounds,
    /// Aggregate probability when nothing is outstanding; also the trend baseline.
    pub default_collection_probability: f64,
    pub collection_band_spread: f64,
    pub collection_up_threshold: f64,
    pub collection_down_threshold: f64,
    pub critical_overdue_amount: f64,
    pub overdue_alert_confidence: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            recent_window_size: 6,
            fallback_base_value: 10_000.0,
            seasonal_factors: DEFAULT_SEASONAL_FACTORS,
            sales_band: Bounds::new(0.85, 1.15),
            decline_alert_threshold: -0.05,
            strong_growth_threshold: 0.10,
            significance_high: 0.10,
            significance_medium: 0.05,
            trend_confidence: 0.78,
            decline_alert_confidence: 0.82,
            max_horizon_months: 36,

            low_stock_threshold: 10,
            over_stock_threshold: 100,
            low_stock_high_severity_count: 5,
            low_stock_confidence: 0.95,
            over_stock_confidence: 0.73,
            inventory_turnover: 0.9,
            inventory_band: Bounds::new(0.8, 0.95),

            default_collection_days: 30.0,
            collection_age_horizon_days: 365.0,
            collection_amount_scale: 50_000.0,
            collection_probability_bounds: Bounds::new(0.3, 0.95),
            default_collection_probability: 0.75,
            collection_band_spread: 0.10,
            collection_up_threshold: 0.8,
            collection_down_threshold: 0.6,
            critical_overdue_amount: 10_000.0,
            overdue_alert_confidence: 0.92,
        }
    }
}

impl AnalyticsConfig {
    /// Parse a (possibly partial) JSON document; absent keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, AnalyticsError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| AnalyticsError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Same defaults with a flat seasonal table (every month 1.0).
    pub fn without_seasonality(mut self) -> Self {
        self.seasonal_factors = [1.0; 12];
        self
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.recent_window_size == 0 {
            return Err(AnalyticsError::invalid_config(
                "recent_window_size must be >= 1",
            ));
        }

        if let Some(idx) = self
            .seasonal_factors
            .iter()
            .position(|f| !(f.is_finite() && *f > 0.0))
        {
            return Err(AnalyticsError::invalid_config(format!(
                "seasonal factor for month {idx} must be a finite positive number"
            )));
        }

        if self.low_stock_threshold >= self.over_stock_threshold {
            return Err(AnalyticsError::invalid_config(
                "low_stock_threshold must be below over_stock_threshold",
            ));
        }

        if !(self.collection_age_horizon_days > 0.0 && self.collection_amount_scale > 0.0) {
            return Err(AnalyticsError::invalid_config(
                "collection_age_horizon_days and collection_amount_scale must be positive",
            ));
        }

        self.sales_band.check("sales_band")?;
        self.inventory_band.check("inventory_band")?;
        self.collection_probability_bounds
            .check("collection_probability_bounds")?;

        let scalars = [
            ("fallback_base_value", self.fallback_base_value),
            ("decline_alert_threshold", self.decline_alert_threshold),
            ("strong_growth_threshold", self.strong_growth_threshold),
            ("significance_high", self.significance_high),
            ("significance_medium", self.significance_medium),
            ("inventory_turnover", self.inventory_turnover),
            ("default_collection_days", self.default_collection_days),
            ("collection_band_spread", self.collection_band_spread),
            ("collection_up_threshold", self.collection_up_threshold),
            ("collection_down_threshold", self.collection_down_threshold),
            ("critical_overdue_amount", self.critical_overdue_amount),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AnalyticsError::invalid_config(format!(
                "{name} must be finite"
            )));
        }

        let confidences = [
            ("trend_confidence", self.trend_confidence),
            ("decline_alert_confidence", self.decline_alert_confidence),
            ("low_stock_confidence", self.low_stock_confidence),
            ("over_stock_confidence", self.over_stock_confidence),
            ("overdue_alert_confidence", self.overdue_alert_confidence),
            (
                "default_collection_probability",
                self.default_collection_probability,
            ),
        ];
        if let Some((name, v)) = confidences
            .iter()
            .find(|(_, v)| !(0.0..=1.0).contains(v))
        {
            return Err(AnalyticsError::invalid_config(format!(
                "{name} must be within [0, 1] (got {v})"
            )));
        }

        if self.significance_medium > self.significance_high {
            return Err(AnalyticsError::invalid_config(
                "significance_medium must not exceed significance_high",
            ));
        }

        if self.collection_down_threshold > self.collection_up_threshold {
            return Err(AnalyticsError::invalid_config(
                "collection_down_threshold must not exceed collection_up_threshold",
            ));
        }

        Ok(())
    }
}
