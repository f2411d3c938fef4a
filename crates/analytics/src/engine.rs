use tracing::{debug, warn};

use ledgerscope_core::{Clock, SystemClock};

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::model::{AnalysisResult, DebtRecord, HistoricalRecord, InventorySnapshotItem};
use crate::{debt, inventory, sales};

/// Deterministic heuristic analytics over business records.
///
/// The engine holds no mutable state: every entry point is a pure function of
/// its arguments, the configuration and the injected clock. It is `Send + Sync`
/// whenever the clock is, and can be shared across request handlers freely.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine<C = SystemClock> {
    config: AnalyticsConfig,
    clock: C,
}

impl AnalyticsEngine<SystemClock> {
    /// Default configuration, wall clock.
    pub fn system() -> Self {
        Self::with_defaults(SystemClock)
    }
}

impl<C: Clock> AnalyticsEngine<C> {
    pub fn new(config: AnalyticsConfig, clock: C) -> Result<Self, AnalyticsError> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    pub fn with_defaults(clock: C) -> Self {
        Self {
            config: AnalyticsConfig::default(),
            clock,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Project monthly sales `horizon_months` ahead of the clock's current month.
    ///
    /// `records` must be in chronological order.
    pub fn forecast_sales(
        &self,
        records: &[HistoricalRecord],
        horizon_months: u32,
    ) -> Result<AnalysisResult, AnalyticsError> {
        debug!(records = records.len(), horizon_months, "forecasting sales");
        let result = sales::forecast_sales(&self.config, self.clock.now(), records, horizon_months)
            .inspect_err(|e| warn!(error = %e, "sales forecast rejected"))?;
        debug!(
            change_percentage = result.trends[0].change_percentage,
            insights = result.insights.len(),
            "sales forecast complete"
        );
        Ok(result)
    }

    /// Classify a stock snapshot and estimate next month's inventory value.
    pub fn analyze_inventory(
        &self,
        items: &[InventorySnapshotItem],
    ) -> Result<AnalysisResult, AnalyticsError> {
        debug!(items = items.len(), "analyzing inventory");
        let result = inventory::analyze_inventory(&self.config, items)
            .inspect_err(|e| warn!(error = %e, "inventory analysis rejected"))?;
        debug!(insights = result.insights.len(), "inventory analysis complete");
        Ok(result)
    }

    /// Estimate receivables collected over the next 30 days.
    pub fn analyze_debt_collection(
        &self,
        debts: &[DebtRecord],
    ) -> Result<AnalysisResult, AnalyticsError> {
        debug!(debts = debts.len(), "analyzing debt collection");
        let result = debt::analyze_debt_collection(&self.config, self.clock.now(), debts)
            .inspect_err(|e| warn!(error = %e, "debt collection analysis rejected"))?;
        debug!(
            change_percentage = result.trends[0].change_percentage,
            insights = result.insights.len(),
            "debt collection analysis complete"
        );
        Ok(result)
    }
}
