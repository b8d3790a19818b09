pub mod recommend;
pub mod scoring;

use crate::advisory::AdvisoryTable;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::report::{MetricPoint, SimReport};
use crate::types::scoring::Score;
use crate::values::MetricValueSet;
use recommend::RecommendPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct EnginePolicy {
    pub base_score: Score,
    pub recommend: RecommendPolicy,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            base_score: scoring::BASE_SCORE,
            recommend: RecommendPolicy::default(),
        }
    }
}

/// One full recompute pass over a value set that must match the catalog.
pub fn evaluate(
    catalog: &Catalog,
    values: &MetricValueSet,
    advisory: &AdvisoryTable,
    policy: &EnginePolicy,
) -> Result<SimReport> {
    values.ensure_consistent(catalog)?;

    let score = scoring::score_with_base(values, policy.base_score);
    let recommendations = recommend::rank_low_metrics(values, advisory, &policy.recommend);
    let points = catalog
        .domains()
        .iter()
        .flat_map(|domain| {
            domain.subgroups.iter().flat_map(move |subgroup| {
                subgroup.metrics.iter().map(move |metric| MetricPoint {
                    domain: domain.name.clone(),
                    subgroup: subgroup.name.clone(),
                    metric: metric.name.clone(),
                    value: values.get(&metric.name).unwrap_or_default(),
                })
            })
        })
        .collect();

    Ok(SimReport {
        score,
        values: points,
        recommendations,
    })
}
