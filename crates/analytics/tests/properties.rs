//! Property tests for the engine's determinism and numeric invariants.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use ledgerscope_analytics::{
    AnalysisResult, AnalyticsConfig, AnalyticsEngine, DebtRecord, DebtStatus, HistoricalRecord,
    InventorySnapshotItem, collection_probability, growth_rate_of,
};
use ledgerscope_core::FixedClock;

fn clock(month: u32) -> FixedClock {
    FixedClock::at(Utc.with_ymd_and_hms(2024, month, 12, 10, 0, 0).unwrap())
}

fn records(totals: &[f64]) -> Vec<HistoricalRecord> {
    totals
        .iter()
        .enumerate()
        .map(|(i, t)| HistoricalRecord::new(format!("P{i}"), *t))
        .collect()
}

fn assert_bands_ordered(result: &AnalysisResult) -> Result<(), TestCaseError> {
    for point in &result.forecasts {
        let band = point.confidence_interval;
        prop_assert!(
            band.lower <= point.predicted_value && point.predicted_value <= band.upper,
            "band {:?} does not contain {}",
            band,
            point.predicted_value
        );
    }
    Ok(())
}

fn debt_status() -> impl Strategy<Value = DebtStatus> {
    prop_oneof![
        Just(DebtStatus::Active),
        Just(DebtStatus::Overdue),
        Just(DebtStatus::Paid),
        Just(DebtStatus::WrittenOff),
    ]
}

fn debt(today: NaiveDate) -> impl Strategy<Value = DebtRecord> {
    (debt_status(), 0.0f64..200_000.0, 0i64..2_000, proptest::option::of(0i64..400)).prop_map(
        move |(status, amount, age, paid_after)| {
            let sale_date = today - Duration::days(age);
            let mut record = DebtRecord::new(status, amount, sale_date);
            if let Some(days) = paid_after {
                record = record.with_last_payment(sale_date + Duration::days(days));
            }
            record
        },
    )
}

#[test]
fn growth_rate_degenerate_inputs() {
    assert_eq!(growth_rate_of(&[]), 0.0);
    assert_eq!(growth_rate_of(&records(&[100.0])), 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: identical inputs and an identical injected clock give identical results.
    #[test]
    fn forecast_is_deterministic(
        totals in prop::collection::vec(1.0f64..1_000_000.0, 0..24),
        horizon in 0u32..24,
        month in 1u32..=12,
    ) {
        let engine = AnalyticsEngine::with_defaults(clock(month));
        let history = records(&totals);

        let first = engine.forecast_sales(&history, horizon).unwrap();
        let second = engine.forecast_sales(&history, horizon).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every sales forecast point lies inside its band.
    #[test]
    fn sales_bands_contain_prediction(
        totals in prop::collection::vec(
            prop_oneof![Just(0.0), 1.0f64..1_000_000.0, -10_000.0f64..-1.0],
            0..24,
        ),
        horizon in 0u32..36,
        month in 1u32..=12,
    ) {
        let engine = AnalyticsEngine::with_defaults(clock(month));
        let result = engine.forecast_sales(&records(&totals), horizon).unwrap();
        prop_assert_eq!(result.forecasts.len(), horizon as usize);
        assert_bands_ordered(&result)?;
    }

    /// Property: positive growth with flat seasonality strictly increases month over month.
    #[test]
    fn positive_growth_compounds_upward(
        start in 1.0f64..100_000.0,
        steps in prop::collection::vec(0.01f64..0.5, 1..6),
        horizon in 2u32..12,
    ) {
        let mut totals = vec![start];
        for step in &steps {
            let last = *totals.last().unwrap();
            totals.push(last * (1.0 + step));
        }

        let config = AnalyticsConfig::default().without_seasonality();
        let engine = AnalyticsEngine::new(config, clock(6)).unwrap();
        let result = engine.forecast_sales(&records(&totals), horizon).unwrap();

        for pair in result.forecasts.windows(2) {
            prop_assert!(pair[1].predicted_value > pair[0].predicted_value);
        }
    }

    /// Property: inventory forecasts stay ordered and finite for any snapshot.
    #[test]
    fn inventory_bands_contain_prediction(
        items in prop::collection::vec(
            (0u64..1_000, proptest::option::of(0.0f64..500.0)),
            0..64,
        ),
    ) {
        let items: Vec<InventorySnapshotItem> = items
            .into_iter()
            .map(|(quantity, unit_price)| InventorySnapshotItem { quantity, unit_price })
            .collect();

        let engine = AnalyticsEngine::with_defaults(clock(3));
        let result = engine.analyze_inventory(&items).unwrap();
        assert_bands_ordered(&result)?;
        prop_assert!(result.trends[0].change_percentage.is_finite());
    }

    /// Property: debt forecasts stay ordered, non-negative and finite.
    #[test]
    fn debt_bands_contain_prediction(
        debts in prop::collection::vec(debt(NaiveDate::from_ymd_opt(2024, 9, 12).unwrap()), 0..32),
    ) {
        let engine = AnalyticsEngine::with_defaults(clock(9));
        let result = engine.analyze_debt_collection(&debts).unwrap();
        assert_bands_ordered(&result)?;

        let point = &result.forecasts[0];
        prop_assert!(point.confidence_interval.lower >= 0.0);
        prop_assert!(result.trends[0].change_percentage.is_finite());
    }

    /// Property: single-debt probability always lands inside the clamp bounds.
    #[test]
    fn collection_probability_is_bounded(
        days in -1_000.0f64..100_000.0,
        amount in 0.0f64..10_000_000.0,
    ) {
        let config = AnalyticsConfig::default();
        let p = collection_probability(&config, days, amount);
        prop_assert!((0.3..=0.95).contains(&p));
    }
}

#[test]
fn decade_old_million_clamps_to_exact_floor() {
    let config = AnalyticsConfig::default();
    assert_eq!(collection_probability(&config, 3650.0, 1_000_000.0), 0.3);
}
