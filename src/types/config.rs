use crate::catalog::Catalog;
use crate::engine::recommend::{RecommendPolicy, DEFAULT_LIMIT, DEFAULT_THRESHOLD};
use crate::engine::scoring::{BASE_SCORE, MAX_SCORE};
use crate::engine::EnginePolicy;
use crate::error::SimError;
use crate::values::{MAX_METRIC_VALUE, MIN_METRIC_VALUE};
use indexmap::IndexMap;
use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimConfig {
    pub scoring: Option<ScoringConfig>,
    pub recommendations: Option<RecommendationsConfig>,
    #[serde(default)]
    pub advisory: IndexMap<String, String>,
    #[serde(default)]
    pub values: IndexMap<String, f64>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub base_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsConfig {
    pub threshold: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl SimConfig {
    pub fn base_score(&self) -> f64 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.base_score)
            .unwrap_or(BASE_SCORE)
    }

    pub fn recommend_policy(&self) -> RecommendPolicy {
        match &self.recommendations {
            Some(recommendations) => RecommendPolicy {
                threshold: recommendations.threshold.unwrap_or(DEFAULT_THRESHOLD),
                limit: recommendations.limit.unwrap_or(DEFAULT_LIMIT),
            },
            None => RecommendPolicy::default(),
        }
    }

    pub fn engine_policy(&self) -> EnginePolicy {
        EnginePolicy {
            base_score: self.base_score(),
            recommend: self.recommend_policy(),
        }
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<(), SimError> {
        let base_score = self.base_score();
        if !(MIN_METRIC_VALUE..MAX_SCORE).contains(&base_score) {
            return Err(SimError::ConfigParse(format!(
                "scoring.base_score must be in [1.0, 5.0) (found {base_score})"
            )));
        }

        let policy = self.recommend_policy();
        if !(MIN_METRIC_VALUE..=MAX_METRIC_VALUE).contains(&policy.threshold) {
            return Err(SimError::ConfigParse(
                "recommendations.threshold must be between 1.0 and 5.0".to_string(),
            ));
        }
        if policy.limit == 0 {
            return Err(SimError::ConfigParse(
                "recommendations.limit must be greater than 0".to_string(),
            ));
        }

        let unknown = self
            .advisory
            .keys()
            .chain(self.values.keys())
            .filter(|name| !catalog.contains(name))
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            return Err(SimError::ConfigParse(format!(
                "unknown metric name(s): {}",
                unknown.join(", ")
            )));
        }

        if let Some((name, _)) = self
            .advisory
            .iter()
            .find(|(_, advice)| advice.trim().is_empty())
        {
            return Err(SimError::ConfigParse(format!(
                "advisory text for '{name}' must be non-empty"
            )));
        }

        if let Some((name, value)) = self
            .values
            .iter()
            .find(|(_, value)| !(MIN_METRIC_VALUE..=MAX_METRIC_VALUE).contains(*value))
        {
            return Err(SimError::ConfigParse(format!(
                "values.\"{name}\" must be between 1.0 and 5.0 (found {value})"
            )));
        }

        if let Some(level) = self.logging.as_ref().and_then(|logging| logging.level.as_ref()) {
            if !matches!(
                level.as_str(),
                "error" | "warn" | "info" | "debug" | "trace"
            ) {
                return Err(SimError::ConfigParse(format!(
                    "unsupported logging.level: {level}"
                )));
            }
        }

        Ok(())
    }
}
