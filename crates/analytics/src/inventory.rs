//! Inventory snapshot analysis: stock-level classification and valuation.

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::growth::significance_of;
use crate::model::{
    AnalysisResult, ConfidenceInterval, Direction, ForecastPoint, Insight, InsightType,
    InventorySnapshotItem, Severity, Trend, to_strings,
};
use crate::recommendations::{
    INVENTORY_BALANCED, INVENTORY_FORECAST_FACTORS, LOW_STOCK, OVER_STOCK, collect_recommendations,
};

const CATEGORY: &str = "inventory";

/// Counts of items outside the balanced band.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct StockLevels {
    pub low: usize,
    pub over: usize,
    pub total: usize,
}

/// Classify items against the exclusive low/over thresholds.
pub fn classify_stock(config: &AnalyticsConfig, items: &[InventorySnapshotItem]) -> StockLevels {
    items.iter().fold(
        StockLevels {
            total: items.len(),
            ..StockLevels::default()
        },
        |mut levels, item| {
            if item.quantity < config.low_stock_threshold {
                levels.low += 1;
            } else if item.quantity > config.over_stock_threshold {
                levels.over += 1;
            }
            levels
        },
    )
}

pub(crate) fn analyze_inventory(
    config: &AnalyticsConfig,
    items: &[InventorySnapshotItem],
) -> Result<AnalysisResult, AnalyticsError> {
    for (idx, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|e| AnalyticsError::invalid_input(format!("item {idx}: {e}")))?;
    }

    let levels = classify_stock(config, items);
    let total_value: f64 = items.iter().map(InventorySnapshotItem::value).sum();
    if !total_value.is_finite() {
        return Err(AnalyticsError::invalid_input(
            "inventory valuation overflowed; quantities or prices are too large",
        ));
    }

    let mut insights = Vec::new();
    if levels.low > 0 {
        let severity = if levels.low > config.low_stock_high_severity_count {
            Severity::High
        } else {
            Severity::Medium
        };
        insights.push(
            Insight::new(
                InsightType::Alert,
                CATEGORY,
                "Low Stock Alert",
                format!(
                    "{} item(s) have fewer than {} units in stock.",
                    levels.low, config.low_stock_threshold
                ),
                severity,
                config.low_stock_confidence,
            )
            .with_recommendations(&LOW_STOCK),
        );
    }
    if levels.over > 0 {
        insights.push(
            Insight::new(
                InsightType::Recommendation,
                CATEGORY,
                "Overstock Detected",
                format!(
                    "{} item(s) hold more than {} units in stock.",
                    levels.over, config.over_stock_threshold
                ),
                Severity::Medium,
                config.over_stock_confidence,
            )
            .with_recommendations(&OVER_STOCK),
        );
    }

    // Asymmetric band around the turnover estimate is intentional.
    let predicted = (total_value * config.inventory_turnover).round();
    let forecast = ForecastPoint {
        period: "Next Month".to_string(),
        predicted_value: predicted,
        confidence_interval: ConfidenceInterval::enclosing(
            predicted,
            total_value * config.inventory_band.lower,
            total_value * config.inventory_band.upper,
        ),
        factors: to_strings(&INVENTORY_FORECAST_FACTORS),
    };

    let balance = if levels.total == 0 {
        0.0
    } else {
        (levels.low as f64 - levels.over as f64) / levels.total as f64
    };
    let trend = Trend {
        metric: "Stock Balance".to_string(),
        direction: if levels.low > levels.over {
            Direction::Down
        } else {
            Direction::Stable
        },
        change_percentage: balance * 100.0,
        significance: significance_of(config, balance),
    };

    let summary = format!(
        "Analyzed {} inventory item(s) worth {:.2}: {} low on stock, {} overstocked.",
        levels.total, total_value, levels.low, levels.over
    );

    let recommendations = collect_recommendations(&insights, INVENTORY_BALANCED);

    Ok(AnalysisResult {
        summary,
        trends: vec![trend],
        forecasts: vec![forecast],
        insights,
        recommendations,
    })
}
