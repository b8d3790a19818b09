use crate::types::scoring::{Score, ScoreBreakdown};
use crate::values::{MetricValueSet, MAX_METRIC_VALUE, MIN_METRIC_VALUE};

pub const BASE_SCORE: Score = 3.2;
pub const MAX_SCORE: Score = 5.0;

/// Composite STAR rating in [`BASE_SCORE`, `MAX_SCORE`].
pub fn score(values: &MetricValueSet) -> Score {
    score_with_base(values, BASE_SCORE)
}

pub fn score_with_base(values: &MetricValueSet, base: Score) -> Score {
    breakdown(values, base).score
}

/// Rescales the value total linearly between the worst and best possible
/// totals onto `[base, MAX_SCORE]`. An empty set scores `base`.
pub fn breakdown(values: &MetricValueSet, base: Score) -> ScoreBreakdown {
    let metric_count = values.len();
    let total = values.total();
    let min_sum = metric_count as f64 * MIN_METRIC_VALUE;
    let max_sum = metric_count as f64 * MAX_METRIC_VALUE;

    let span = max_sum - min_sum;
    let ratio = if span > 0.0 {
        ((total - min_sum) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    // NaN totals collapse to the floor.
    let ratio = if ratio.is_nan() { 0.0 } else { ratio };
    let score = base + ratio * (MAX_SCORE - base);

    tracing::debug!(metric_count, total, ratio, score, "composite score computed");
    ScoreBreakdown {
        metric_count,
        total,
        min_sum,
        max_sum,
        ratio,
        score,
    }
}
