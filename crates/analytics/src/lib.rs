//! `ledgerscope-analytics`
//!
//! **Responsibility:** business analytics & forecasting over historical ERP records.
//!
//! The engine is a deterministic heuristic, not a learned model:
//! - It never mutates its inputs and performs no IO.
//! - "Now" comes from an injected [`Clock`](ledgerscope_core::Clock).
//! - Every tunable constant lives in [`AnalyticsConfig`].
//!
//! Entry points: [`AnalyticsEngine::forecast_sales`], [`AnalyticsEngine::analyze_inventory`],
//! [`AnalyticsEngine::analyze_debt_collection`]. Each returns an [`AnalysisResult`].

pub mod config;
pub mod debt;
pub mod engine;
pub mod error;
pub mod growth;
pub mod inventory;
pub mod job;
pub mod model;
pub mod recommendations;
mod sales;
pub mod scheduler;
pub mod seasonal;

pub use config::{AnalyticsConfig, Bounds, DEFAULT_SEASONAL_FACTORS};
pub use debt::{average_collection_days, collection_probability, portfolio_collection_probability};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use growth::{growth_rate_of, significance_of};
pub use inventory::{StockLevels, classify_stock};
pub use job::{AnalyticsJob, DebtCollectionJob, InventoryAnalysisJob, SalesForecastJob, SalesHistory};
pub use model::{
    AnalysisResult, ConfidenceInterval, DebtRecord, DebtStatus, Direction, ForecastPoint,
    HistoricalRecord, Insight, InsightType, InventorySnapshotItem, Severity, Significance, Trend,
};
pub use scheduler::{AnalyticsScheduler, LocalScheduler, TenantScope};
pub use seasonal::seasonal_factor;
