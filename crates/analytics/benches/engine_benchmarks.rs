use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use ledgerscope_analytics::{
    AnalyticsEngine, DebtRecord, DebtStatus, HistoricalRecord, InventorySnapshotItem,
};
use ledgerscope_core::FixedClock;

const SIZES: [usize; 3] = [100, 1_000, 5_000];

fn engine() -> AnalyticsEngine<FixedClock> {
    AnalyticsEngine::with_defaults(FixedClock::at(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ))
}

fn sales_history(n: usize) -> Vec<HistoricalRecord> {
    (0..n)
        .map(|i| HistoricalRecord::new(format!("P{i}"), 10_000.0 + (i % 17) as f64 * 250.0))
        .collect()
}

fn inventory(n: usize) -> Vec<InventorySnapshotItem> {
    (0..n)
        .map(|i| InventorySnapshotItem::new((i % 150) as u64, 1.0 + (i % 40) as f64))
        .collect()
}

fn ledger(n: usize) -> Vec<DebtRecord> {
    let base = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let statuses = [
        DebtStatus::Active,
        DebtStatus::Overdue,
        DebtStatus::Paid,
        DebtStatus::WrittenOff,
    ];
    (0..n)
        .map(|i| {
            let sale_date = base - Duration::days((i % 400) as i64);
            let status = statuses[i % statuses.len()];
            let record = DebtRecord::new(status, (i % 90) as f64 * 125.0, sale_date);
            if status == DebtStatus::Paid {
                record.with_last_payment(sale_date + Duration::days((i % 60) as i64))
            } else {
                record
            }
        })
        .collect()
}

fn bench_forecast_sales(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("forecast_sales");
    for size in SIZES {
        let records = sales_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| engine.forecast_sales(black_box(records), 12).unwrap())
        });
    }
    group.finish();
}

fn bench_analyze_inventory(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("analyze_inventory");
    for size in SIZES {
        let items = inventory(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| engine.analyze_inventory(black_box(items)).unwrap())
        });
    }
    group.finish();
}

fn bench_analyze_debt_collection(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("analyze_debt_collection");
    for size in SIZES {
        let debts = ledger(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &debts, |b, debts| {
            b.iter(|| engine.analyze_debt_collection(black_box(debts)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_forecast_sales,
    bench_analyze_inventory,
    bench_analyze_debt_collection
);
criterion_main!(benches);
