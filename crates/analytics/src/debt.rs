//! Receivables analysis and the collection-probability model.
//!
//! Each open debt gets a heuristic probability of being collected that decays
//! with age (relative to a one-year horizon) and with size (relative to a fixed
//! amount scale), clamped to a floor and a ceiling. The portfolio probability is
//! the amount-weighted mean.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::growth::significance_of;
use crate::model::{
    AnalysisResult, ConfidenceInterval, DebtRecord, DebtStatus, Direction, ForecastPoint, Insight,
    InsightType, Severity, Trend, to_strings,
};
use crate::recommendations::{
    COLLECTION_FORECAST_FACTORS, COLLECTIONS_HEALTHY, OVERDUE_DEBTS, collect_recommendations,
};

const CATEGORY: &str = "collections";

/// Probability that a single open debt is collected.
pub fn collection_probability(
    config: &AnalyticsConfig,
    days_since_sale: f64,
    remaining_amount: f64,
) -> f64 {
    let raw = 1.0
        - days_since_sale / config.collection_age_horizon_days
        - remaining_amount / config.collection_amount_scale;
    let bounds = config.collection_probability_bounds;
    raw.clamp(bounds.lower, bounds.upper)
}

/// Amount-weighted collection probability over open debts as of `today`.
///
/// Falls back to `default_collection_probability` when nothing is outstanding.
pub fn portfolio_collection_probability(
    config: &AnalyticsConfig,
    today: NaiveDate,
    debts: &[DebtRecord],
) -> f64 {
    let (weighted, outstanding) = debts
        .iter()
        .filter(|d| d.status.is_open())
        .fold((0.0_f64, 0.0_f64), |(weighted, outstanding), d| {
            let age = (today - d.sale_date).num_days() as f64;
            let p = collection_probability(config, age, d.remaining_amount);
            (
                weighted + p * d.remaining_amount,
                outstanding + d.remaining_amount,
            )
        });

    if outstanding > 0.0 {
        weighted / outstanding
    } else {
        config.default_collection_probability
    }
}

/// Mean days from sale to final payment over settled debts.
pub fn average_collection_days(config: &AnalyticsConfig, debts: &[DebtRecord]) -> f64 {
    let durations: Vec<f64> = debts
        .iter()
        .filter(|d| d.status == DebtStatus::Paid)
        .filter_map(|d| {
            d.last_payment_date
                .map(|paid| (paid - d.sale_date).num_days() as f64)
        })
        .collect();

    if durations.is_empty() {
        return config.default_collection_days;
    }
    durations.iter().sum::<f64>() / durations.len() as f64
}

pub(crate) fn analyze_debt_collection(
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    debts: &[DebtRecord],
) -> Result<AnalysisResult, AnalyticsError> {
    for (idx, debt) in debts.iter().enumerate() {
        debt.validate()
            .map_err(|e| AnalyticsError::invalid_input(format!("debt {idx}: {e}")))?;
    }

    let today = now.date_naive();
    let open_count = debts.iter().filter(|d| d.status.is_open()).count();
    let total_outstanding: f64 = debts
        .iter()
        .filter(|d| d.status.is_open())
        .map(|d| d.remaining_amount)
        .sum();
    if !total_outstanding.is_finite() {
        return Err(AnalyticsError::invalid_input(
            "outstanding total overflowed; remaining amounts are too large",
        ));
    }
    let overdue: Vec<&DebtRecord> = debts
        .iter()
        .filter(|d| d.status == DebtStatus::Overdue)
        .collect();

    let avg_days = average_collection_days(config, debts);
    let probability = portfolio_collection_probability(config, today, debts);

    let mut insights = Vec::new();
    if !overdue.is_empty() {
        let overdue_amount: f64 = overdue.iter().map(|d| d.remaining_amount).sum();
        let severity = if overdue_amount > config.critical_overdue_amount {
            Severity::Critical
        } else {
            Severity::High
        };
        insights.push(
            Insight::new(
                InsightType::Alert,
                CATEGORY,
                "Overdue Receivables",
                format!(
                    "{} overdue debt(s) totalling {overdue_amount:.2} require follow-up.",
                    overdue.len()
                ),
                severity,
                config.overdue_alert_confidence,
            )
            .with_recommendations(&OVERDUE_DEBTS),
        );
    }

    let spread = config.collection_band_spread;
    let predicted = (total_outstanding * probability).round();
    let upper = total_outstanding * (probability + spread);
    if !upper.is_finite() {
        return Err(AnalyticsError::invalid_input(
            "collection forecast band overflowed; remaining amounts are too large",
        ));
    }
    let forecast = ForecastPoint {
        period: "Next 30 Days".to_string(),
        predicted_value: predicted,
        confidence_interval: ConfidenceInterval::enclosing(
            predicted,
            (total_outstanding * (probability - spread)).max(0.0),
            upper,
        ),
        factors: to_strings(&COLLECTION_FORECAST_FACTORS),
    };

    let direction = if probability > config.collection_up_threshold {
        Direction::Up
    } else if probability < config.collection_down_threshold {
        Direction::Down
    } else {
        Direction::Stable
    };
    let deviation = probability - config.default_collection_probability;
    let trend = Trend {
        metric: "Collection Probability".to_string(),
        direction,
        change_percentage: deviation * 100.0,
        significance: significance_of(config, deviation),
    };

    let summary = format!(
        "{open_count} open debt(s) with {total_outstanding:.2} outstanding; estimated collection probability {:.1}%, average collection time {avg_days:.0} day(s).",
        probability * 100.0
    );

    let recommendations = collect_recommendations(&insights, COLLECTIONS_HEALTHY);

    Ok(AnalysisResult {
        summary,
        trends: vec![trend],
        forecasts: vec![forecast],
        insights,
        recommendations,
    })
}
