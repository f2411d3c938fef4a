//! End-to-end scenarios through the public engine API.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use ledgerscope_analytics::{
    AnalyticsEngine, DebtRecord, DebtStatus, Direction, HistoricalRecord, InsightType,
    InventorySnapshotItem, Severity,
};
use ledgerscope_core::FixedClock;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 10, 14, 0, 0).unwrap()
}

fn engine() -> AnalyticsEngine<FixedClock> {
    AnalyticsEngine::with_defaults(FixedClock::at(now()))
}

fn days_ago(days: i64) -> NaiveDate {
    now().date_naive() - Duration::days(days)
}

fn monthly(totals: &[f64]) -> Vec<HistoricalRecord> {
    totals
        .iter()
        .enumerate()
        .map(|(i, t)| HistoricalRecord::new(format!("2024-{:02}", i + 7), *t))
        .collect()
}

#[test]
fn steady_sales_decline_raises_alert() {
    let records = monthly(&[10000.0, 9500.0, 9000.0, 8500.0, 8000.0, 7500.0]);
    let result = engine().forecast_sales(&records, 3).unwrap();

    assert_eq!(result.trends[0].direction, Direction::Down);
    assert_eq!(result.forecasts.len(), 3);

    let alert = result
        .insights_of(InsightType::Alert)
        .next()
        .expect("decline alert");
    assert_eq!(alert.severity, Severity::High);
    assert_eq!(alert.confidence, 0.82);
    assert!(alert.recommendations.as_ref().unwrap().len() >= 4);

    let trend = result.insights_of(InsightType::Trend).next().unwrap();
    assert_eq!(trend.severity, Severity::Medium);
    assert_eq!(trend.confidence, 0.78);
}

#[test]
fn overdue_debt_above_limit_is_critical() {
    let debts = vec![DebtRecord::new(DebtStatus::Overdue, 15_000.0, days_ago(60))];
    let result = engine().analyze_debt_collection(&debts).unwrap();

    assert_eq!(result.insights[0].kind, InsightType::Alert);
    assert_eq!(result.insights[0].severity, Severity::Critical);
    assert_eq!(result.insights[0].confidence, 0.92);
    assert_eq!(result.insights[0].recommendations.as_ref().unwrap().len(), 4);
}

#[test]
fn balanced_inventory_is_quiet() {
    let items = vec![
        InventorySnapshotItem::new(10, 4.0),
        InventorySnapshotItem::new(55, 12.5),
        InventorySnapshotItem::new(100, 1.0),
    ];
    let result = engine().analyze_inventory(&items).unwrap();

    assert_eq!(result.insights_of(InsightType::Alert).count(), 0);
    assert_eq!(result.insights_of(InsightType::Recommendation).count(), 0);
    assert_eq!(result.trends[0].direction, Direction::Stable);
}

#[test]
fn quantity_ten_is_neither_low_nor_over() {
    let result = engine()
        .analyze_inventory(&[InventorySnapshotItem::new(10, 5.0)])
        .unwrap();
    assert!(result.insights.is_empty());
    assert_eq!(result.trends[0].change_percentage, 0.0);
}

#[test]
fn ancient_large_debt_clamps_to_floor() {
    let debts = vec![DebtRecord::new(
        DebtStatus::Active,
        1_000_000.0,
        days_ago(3653),
    )];
    let result = engine().analyze_debt_collection(&debts).unwrap();

    // aggregate of a single debt is its own (clamped) probability
    assert!((result.trends[0].change_percentage - (0.3 - 0.75) * 100.0).abs() < 1e-9);
    assert_eq!(result.forecasts[0].predicted_value, 300_000.0);
    assert_eq!(result.trends[0].direction, Direction::Down);
}

#[test]
fn result_serializes_for_the_host() {
    let records = monthly(&[100.0, 120.0]);
    let result = engine().forecast_sales(&records, 1).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["trends"][0]["direction"], "up");
    assert_eq!(json["trends"][0]["significance"], "high");
    assert_eq!(json["insights"][0]["type"], "trend");
    assert_eq!(json["forecasts"][0]["period"], "March 2025");
    assert!(json["forecasts"][0]["confidence_interval"]["lower"].is_number());
}
