//! Sales forecasting.
//!
//! Model (random walk with drift):
//! - Estimate the average monthly growth over the trailing window.
//! - Seed from the last observed total.
//! - Each projected month compounds the previous projection by the growth rate,
//!   then applies the month's seasonal multiplier.

use chrono::{DateTime, Datelike, Months, Utc};

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::growth::{growth_rate_of, significance_of};
use crate::model::{
    AnalysisResult, ConfidenceInterval, Direction, ForecastPoint, HistoricalRecord, Insight,
    InsightType, Severity, Trend, to_strings,
};
use crate::recommendations::{
    REGULAR_MONITORING, SALES_DECLINE_ALERT, SALES_DECLINING, SALES_FORECAST_FACTORS,
    SALES_STABLE, SALES_STRONG_GROWTH,
};
use crate::seasonal::seasonal_factor;

const CATEGORY: &str = "sales";

pub(crate) fn forecast_sales(
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    records: &[HistoricalRecord],
    horizon_months: u32,
) -> Result<AnalysisResult, AnalyticsError> {
    for record in records {
        record.validate()?;
    }
    if horizon_months > config.max_horizon_months {
        return Err(AnalyticsError::invalid_input(format!(
            "horizon of {horizon_months} months exceeds the maximum of {}",
            config.max_horizon_months
        )));
    }

    let recent = &records[records.len().saturating_sub(config.recent_window_size)..];
    let growth_rate = growth_rate_of(recent);
    if !(growth_rate * 100.0).is_finite() {
        return Err(AnalyticsError::invalid_input(
            "sales growth rate is not finite; historical totals are too extreme",
        ));
    }

    let forecasts = project(config, now, recent, growth_rate, horizon_months)?;

    let direction = Direction::of(growth_rate);
    let trend = Trend {
        metric: "Monthly Sales".to_string(),
        direction,
        change_percentage: growth_rate * 100.0,
        significance: significance_of(config, growth_rate),
    };

    let mut insights = vec![trend_insight(config, growth_rate, recent.len())];
    if growth_rate < config.decline_alert_threshold {
        insights.push(
            Insight::new(
                InsightType::Alert,
                CATEGORY,
                "Declining Sales Alert",
                format!(
                    "Sales have declined by an average of {:.1}% per month over the last {} period(s).",
                    growth_rate.abs() * 100.0,
                    recent.len()
                ),
                Severity::High,
                config.decline_alert_confidence,
            )
            .with_recommendations(&SALES_DECLINE_ALERT),
        );
    }

    let summary = format!(
        "Sales forecast for the next {horizon_months} month(s) from {} recent period(s): {} trend, average monthly growth {:+.1}%.",
        recent.len(),
        direction_word(direction),
        growth_rate * 100.0
    );

    Ok(AnalysisResult {
        summary,
        trends: vec![trend],
        forecasts,
        insights,
        recommendations: recommendations_for(config, growth_rate),
    })
}

fn project(
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    recent: &[HistoricalRecord],
    growth_rate: f64,
    horizon_months: u32,
) -> Result<Vec<ForecastPoint>, AnalyticsError> {
    let mut base_value = recent
        .last()
        .map(|r| r.total)
        .unwrap_or(config.fallback_base_value);

    let mut points = Vec::with_capacity(horizon_months as usize);
    for i in 1..=horizon_months {
        let target = now.checked_add_months(Months::new(i)).ok_or_else(|| {
            AnalyticsError::invalid_input("forecast horizon runs past the supported calendar")
        })?;
        let factor = seasonal_factor(&config.seasonal_factors, target.month0() as usize)?;
        let predicted = base_value * (1.0 + growth_rate) * factor;
        let (lower, upper) = (
            predicted * config.sales_band.lower,
            predicted * config.sales_band.upper,
        );
        if !(predicted.is_finite() && lower.is_finite() && upper.is_finite()) {
            return Err(AnalyticsError::invalid_input(format!(
                "sales projection overflowed at month {i}; historical growth is too extreme"
            )));
        }

        points.push(ForecastPoint {
            period: target.format("%B %Y").to_string(),
            predicted_value: predicted,
            confidence_interval: ConfidenceInterval::enclosing(predicted, lower, upper),
            factors: to_strings(&SALES_FORECAST_FACTORS),
        });

        // Compound: the next month grows from this projection.
        base_value = predicted;
    }
    Ok(points)
}

fn trend_insight(config: &AnalyticsConfig, growth_rate: f64, window_len: usize) -> Insight {
    let severity = if growth_rate < -config.strong_growth_threshold {
        Severity::High
    } else if growth_rate > config.strong_growth_threshold {
        Severity::Low
    } else {
        Severity::Medium
    };

    Insight::new(
        InsightType::Trend,
        CATEGORY,
        "Sales Trend Analysis",
        format!(
            "Sales are trending {} with an average monthly change of {:+.1}% across {window_len} recent period(s).",
            direction_word(Direction::of(growth_rate)),
            growth_rate * 100.0
        ),
        severity,
        config.trend_confidence,
    )
}

fn recommendations_for(config: &AnalyticsConfig, growth_rate: f64) -> Vec<String> {
    let bracket: &[&str] = if growth_rate < config.decline_alert_threshold {
        &SALES_DECLINING
    } else if growth_rate > config.strong_growth_threshold {
        &SALES_STRONG_GROWTH
    } else {
        &SALES_STABLE
    };

    let mut out = to_strings(bracket);
    out.push(REGULAR_MONITORING.to_string());
    out
}

fn direction_word(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "upward",
        Direction::Down => "downward",
        Direction::Stable => "flat",
    }
}
