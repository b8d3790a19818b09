use crate::advisory::AdvisoryTable;
use crate::types::report::Recommendation;
use crate::values::MetricValueSet;

pub const DEFAULT_THRESHOLD: f64 = 3.0;
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendPolicy {
    /// Metrics strictly below this value are candidates.
    pub threshold: f64,
    pub limit: usize,
}

impl Default for RecommendPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Worst metrics first. Equal values keep their catalog order.
pub fn rank_low_metrics(
    values: &MetricValueSet,
    advisory: &AdvisoryTable,
    policy: &RecommendPolicy,
) -> Vec<Recommendation> {
    let mut low = values
        .iter()
        .filter(|(_, value)| *value < policy.threshold)
        .collect::<Vec<_>>();
    // stable
    low.sort_by(|left, right| left.1.total_cmp(&right.1));
    low.truncate(policy.limit);

    let recommendations = low
        .into_iter()
        .map(|(metric, value)| {
            let specific = advisory.get(metric);
            Recommendation {
                metric: metric.to_string(),
                value,
                advice: advisory.advice_for(metric).to_string(),
                has_specific_advice: specific.is_some(),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        count = recommendations.len(),
        threshold = policy.threshold,
        "recommendations ranked"
    );
    recommendations
}

pub fn recommend(values: &MetricValueSet, advisory: &AdvisoryTable) -> Vec<String> {
    rank_low_metrics(values, advisory, &RecommendPolicy::default())
        .iter()
        .map(Recommendation::line)
        .collect()
}
