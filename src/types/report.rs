use crate::types::scoring::Score;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub metric: String,
    pub value: f64,
    pub advice: String,
    pub has_specific_advice: bool,
}

impl Recommendation {
    /// Display line: `📉 "<metric>" (score: <value>) – <advice>`.
    pub fn line(&self) -> String {
        format!(
            "📉 \"{}\" (score: {:?}) – {}",
            self.metric, self.value, self.advice
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    pub domain: String,
    pub subgroup: String,
    pub metric: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub score: Score,
    pub values: Vec<MetricPoint>,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_embeds_metric_value_and_advice() {
        let recommendation = Recommendation {
            metric: "Getting Needed Care".to_string(),
            value: 2.0,
            advice: "Focus operational improvements on this area.".to_string(),
            has_specific_advice: false,
        };
        assert_eq!(
            recommendation.line(),
            "📉 \"Getting Needed Care\" (score: 2.0) – Focus operational improvements on this area."
        );
    }

    #[test]
    fn line_keeps_fractional_values() {
        let recommendation = Recommendation {
            metric: "X".to_string(),
            value: 2.5,
            advice: "Do it.".to_string(),
            has_specific_advice: true,
        };
        assert!(recommendation.line().contains("(score: 2.5)"));
    }
}
