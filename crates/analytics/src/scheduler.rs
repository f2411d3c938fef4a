use ledgerscope_core::TenantId;

use crate::error::AnalyticsError;
use crate::job::AnalyticsJob;
use crate::model::AnalysisResult;

/// Which tenants' reports a worker may compute.
///
/// A shared reporting worker uses `Any`; a worker pinned to one tenant's read
/// models uses `Tenant` so a misrouted job cannot leak another tenant's figures.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TenantScope {
    Any,
    Tenant(TenantId),
}

impl TenantScope {
    pub fn allows(&self, tenant_id: TenantId) -> bool {
        match self {
            TenantScope::Any => true,
            TenantScope::Tenant(t) => *t == tenant_id,
        }
    }
}

/// Runs analytics jobs on behalf of a reporting worker.
///
/// The provided `run` checks tenant scope before touching the job's records.
pub trait AnalyticsScheduler: Send + Sync + 'static {
    fn scope(&self) -> TenantScope;

    fn run<J: AnalyticsJob>(&self, job: J) -> Result<AnalysisResult, AnalyticsError> {
        let tenant = job.tenant_id();
        if !self.scope().allows(tenant) {
            tracing::warn!(%tenant, "analytics job outside scheduler scope");
            return Err(AnalyticsError::invalid_input(format!(
                "tenant scope violation: worker may not analyze tenant {tenant}"
            )));
        }
        job.run()
    }
}

/// Computes reports inline on the caller's thread (request handlers, tests).
#[derive(Debug, Copy, Clone)]
pub struct LocalScheduler {
    scope: TenantScope,
}

impl LocalScheduler {
    pub fn new(scope: TenantScope) -> Self {
        Self { scope }
    }

    pub fn for_tenant(tenant_id: TenantId) -> Self {
        Self::new(TenantScope::Tenant(tenant_id))
    }
}

impl AnalyticsScheduler for LocalScheduler {
    fn scope(&self) -> TenantScope {
        self.scope
    }
}
