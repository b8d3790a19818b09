use crate::catalog::Catalog;
use crate::error::{Result, SimError};
use indexmap::IndexMap;
use serde::Serialize;

pub const MIN_METRIC_VALUE: f64 = 1.0;
pub const MAX_METRIC_VALUE: f64 = 5.0;

/// Current value of every metric, kept in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricValueSet {
    values: IndexMap<String, f64>,
}

pub fn clamp_metric_value(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_METRIC_VALUE;
    }
    value.clamp(MIN_METRIC_VALUE, MAX_METRIC_VALUE)
}

impl MetricValueSet {
    /// Builds a value set from pairs as given; no clamping or catalog check.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Replaces one existing entry. The value is clamped into [1.0, 5.0].
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| SimError::UnknownMetric(name.to_string()))?;
        let clamped = clamp_metric_value(value);
        if clamped != value {
            tracing::warn!(metric = name, requested = value, applied = clamped, "value clamped");
        }
        *slot = clamped;
        Ok(clamped)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Fails when the set does not cover exactly the catalog's metrics.
    pub fn ensure_consistent(&self, catalog: &Catalog) -> Result<()> {
        let missing = catalog
            .metric_names()
            .filter(|name| !self.values.contains_key(*name))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(SimError::CatalogInconsistency(format!(
                "missing value(s) for: {}",
                missing.join(", ")
            )));
        }

        let extra = self
            .values
            .keys()
            .filter(|name| !catalog.contains(name))
            .map(String::as_str)
            .collect::<Vec<_>>();
        if !extra.is_empty() {
            return Err(SimError::CatalogInconsistency(format!(
                "value(s) for metrics outside the catalog: {}",
                extra.join(", ")
            )));
        }
        Ok(())
    }
}
