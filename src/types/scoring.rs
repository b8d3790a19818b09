use serde::Serialize;

pub type Score = f64;

/// Intermediate terms of one composite score computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub metric_count: usize,
    pub total: f64,
    pub min_sum: f64,
    pub max_sum: f64,
    pub ratio: f64,
    pub score: Score,
}
