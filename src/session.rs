use crate::advisory::AdvisoryTable;
use crate::baseline::baseline;
use crate::catalog::Catalog;
use crate::engine::{self, EnginePolicy};
use crate::error::Result;
use crate::types::report::SimReport;
use crate::values::MetricValueSet;

/// Owns the only mutable state: the current value set. Every edit or reset
/// is followed by one synchronous recompute.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    advisory: AdvisoryTable,
    policy: EnginePolicy,
    values: MetricValueSet,
}

impl Session {
    pub fn new(catalog: Catalog, advisory: AdvisoryTable, policy: EnginePolicy) -> Self {
        let values = baseline(&catalog);
        Self {
            catalog,
            advisory,
            policy,
            values,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn values(&self) -> &MetricValueSet {
        &self.values
    }

    pub fn on_edit(&mut self, metric: &str, value: f64) -> Result<SimReport> {
        let applied = self.values.set(metric, value)?;
        tracing::info!(metric, value = applied, "metric edited");
        self.snapshot()
    }

    pub fn on_reset(&mut self) -> Result<SimReport> {
        self.values = baseline(&self.catalog);
        tracing::info!("values reset to baseline");
        self.snapshot()
    }

    pub fn snapshot(&self) -> Result<SimReport> {
        engine::evaluate(&self.catalog, &self.values, &self.advisory, &self.policy)
    }
}
