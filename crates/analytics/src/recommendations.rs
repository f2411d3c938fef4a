//! Fixed recommendation and factor texts.

use crate::model::Insight;

pub const REGULAR_MONITORING: &str =
    "Continue regular monitoring of key business metrics and review this analysis monthly";

pub const SALES_FORECAST_FACTORS: [&str; 3] =
    ["historical_trend", "seasonal_adjustment", "market_conditions"];

pub const SALES_DECLINE_ALERT: [&str; 4] = [
    "Review pricing strategy against current competitor offers",
    "Launch targeted promotions for slow-moving product lines",
    "Reach out to lapsed customers with retention offers",
    "Analyze recent customer feedback for service or quality issues",
];

pub const SALES_DECLINING: [&str; 3] = [
    "Investigate the root causes of the sales decline",
    "Reallocate marketing budget to the best-performing channels",
    "Tighten purchasing to avoid building excess stock",
];

pub const SALES_STRONG_GROWTH: [&str; 3] = [
    "Increase inventory levels ahead of projected demand",
    "Evaluate capacity to scale operations and staffing",
    "Invest further in the channels driving growth",
];

pub const SALES_STABLE: [&str; 2] = [
    "Explore new markets or product lines to stimulate growth",
    "Focus on customer retention and repeat purchases",
];

pub const INVENTORY_FORECAST_FACTORS: [&str; 2] = ["inventory_turnover", "current_stock_levels"];

pub const LOW_STOCK: [&str; 3] = [
    "Reorder low-stock items immediately",
    "Review reorder points for fast-moving items",
    "Contact suppliers to confirm lead times",
];

pub const OVER_STOCK: [&str; 3] = [
    "Run promotions to clear excess stock",
    "Reduce purchase quantities for overstocked items",
    "Consider redistributing stock across locations",
];

pub const INVENTORY_BALANCED: &str = "Stock levels are balanced; keep current reorder policies";

pub const COLLECTION_FORECAST_FACTORS: [&str; 3] =
    ["collection_probability", "debt_age", "outstanding_amount"];

pub const OVERDUE_DEBTS: [&str; 4] = [
    "Contact overdue customers immediately",
    "Offer structured payment plans for large balances",
    "Review credit limits for customers with overdue balances",
    "Escalate long-overdue accounts to collections",
];

pub const COLLECTIONS_HEALTHY: &str = "No overdue receivables; keep current credit terms";

/// Recommendations of every insight in emission order, or `fallback` when none
/// fired; the monitoring reminder always closes the list.
pub(crate) fn collect_recommendations(insights: &[Insight], fallback: &str) -> Vec<String> {
    let mut out: Vec<String> = insights
        .iter()
        .filter_map(|i| i.recommendations.as_ref())
        .flatten()
        .cloned()
        .collect();
    if out.is_empty() {
        out.push(fallback.to_string());
    }
    out.push(REGULAR_MONITORING.to_string());
    out
}
