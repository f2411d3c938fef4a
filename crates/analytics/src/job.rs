use serde::{Deserialize, Serialize};

use ledgerscope_core::{Clock, SystemClock, TenantId};

use crate::config::AnalyticsConfig;
use crate::engine::AnalyticsEngine;
use crate::error::AnalyticsError;
use crate::model::{AnalysisResult, DebtRecord, HistoricalRecord, InventorySnapshotItem};

/// A tenant-scoped analytics unit.
///
/// Inputs are provided by callers (read models, reports); this crate stays
/// storage-agnostic.
pub trait AnalyticsJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// The tenant this job belongs to (tenant-safe execution model).
    fn tenant_id(&self) -> TenantId;

    /// The records the job will analyze.
    fn input(&self) -> &Self::Input;

    /// Run the analysis. Must not mutate domain state.
    fn run(&self) -> Result<AnalysisResult, AnalyticsError>;
}

/// Chronological sales history plus how far to project it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesHistory {
    pub records: Vec<HistoricalRecord>,
    pub horizon_months: u32,
}

macro_rules! analytics_job {
    ($(#[$doc:meta])* $job:ident, $input:ty, |$engine:ident, $data:ident| $body:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $job<C = SystemClock> {
            tenant_id: TenantId,
            input: $input,
            engine: AnalyticsEngine<C>,
        }

        impl $job<SystemClock> {
            /// Default configuration, wall clock.
            pub fn new(tenant_id: TenantId, input: $input) -> Self {
                Self {
                    tenant_id,
                    input,
                    engine: AnalyticsEngine::system(),
                }
            }
        }

        impl<C: Clock + Clone> $job<C> {
            /// Override the engine's constants, keeping its clock.
            pub fn with_config(self, config: AnalyticsConfig) -> Result<Self, AnalyticsError> {
                let engine = AnalyticsEngine::new(config, self.engine.clock().clone())?;
                Ok(Self { engine, ..self })
            }
        }

        impl<C: Clock> $job<C> {
            /// Swap in a configured engine (custom thresholds, fixed clock).
            pub fn with_engine<D: Clock>(self, engine: AnalyticsEngine<D>) -> $job<D> {
                $job {
                    tenant_id: self.tenant_id,
                    input: self.input,
                    engine,
                }
            }
        }

        impl<C: Clock + 'static> AnalyticsJob for $job<C> {
            type Input = $input;

            fn tenant_id(&self) -> TenantId {
                self.tenant_id
            }

            fn input(&self) -> &Self::Input {
                &self.input
            }

            fn run(&self) -> Result<AnalysisResult, AnalyticsError> {
                let $engine = &self.engine;
                let $data = &self.input;
                $body
            }
        }
    };
}

analytics_job!(
    /// Sales forecast over a tenant's monthly history.
    SalesForecastJob,
    SalesHistory,
    |engine, history| engine.forecast_sales(&history.records, history.horizon_months)
);

analytics_job!(
    /// Stock-level analysis over a tenant's inventory snapshot.
    InventoryAnalysisJob,
    Vec<InventorySnapshotItem>,
    |engine, items| engine.analyze_inventory(items)
);

analytics_job!(
    /// Collection estimate over a tenant's receivables ledger.
    DebtCollectionJob,
    Vec<DebtRecord>,
    |engine, debts| engine.analyze_debt_collection(debts)
);
