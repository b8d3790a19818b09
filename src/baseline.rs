use crate::catalog::Catalog;
use crate::values::MetricValueSet;

pub struct BaselineRule {
    pub keywords: &'static [&'static str],
    pub value: f64,
}

/// Checked in order; the first rule with a keyword contained in the metric
/// name (case-sensitive) decides the value.
pub const BASELINE_RULES: &[BaselineRule] = &[
    BaselineRule {
        keywords: &["Complaints", "Problems"],
        value: 1.0,
    },
    BaselineRule {
        keywords: &["Rating", "Adherence"],
        value: 3.0,
    },
    BaselineRule {
        keywords: &["Accuracy", "Timeliness"],
        value: 4.0,
    },
];

pub const DEFAULT_BASELINE_VALUE: f64 = 2.0;

pub fn classify(name: &str) -> f64 {
    BASELINE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|rule| rule.value)
        .unwrap_or(DEFAULT_BASELINE_VALUE)
}

pub fn baseline(catalog: &Catalog) -> MetricValueSet {
    MetricValueSet::from_pairs(
        catalog
            .metric_names()
            .map(|name| (name.to_string(), classify(name))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::init_catalog;

    #[test]
    fn classify_follows_rule_order() {
        assert_eq!(classify("Complaints About the Health Plan"), 1.0);
        assert_eq!(classify("Members Having Problems Getting Care"), 1.0);
        assert_eq!(classify("Customer Service Rating"), 3.0);
        assert_eq!(classify("Medication Adherence - Diabetes"), 3.0);
        assert_eq!(classify("Timeliness of Appeals Decisions"), 4.0);
        assert_eq!(classify("Call Center Accuracy"), 4.0);
        assert_eq!(classify("Getting Needed Care"), 2.0);
    }

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(classify("Complaints Rating"), 1.0);
        assert_eq!(classify("Adherence Timeliness"), 3.0);
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert_eq!(classify("complaints about the plan"), 2.0);
        assert_eq!(classify("Plan Makes Timely Decisions About Appeals"), 2.0);
    }

    #[test]
    fn baseline_covers_catalog_in_order() {
        let catalog = init_catalog();
        let values = baseline(&catalog);
        assert_eq!(values.len(), catalog.len());
        let names = values.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, catalog.metric_names().collect::<Vec<_>>());
        assert_eq!(values.get("Complaints About the Health Plan"), Some(1.0));
        assert_eq!(values.get("Customer Service Rating"), Some(3.0));
        assert_eq!(values.get("Timeliness of Appeals Decisions"), Some(4.0));
        assert_eq!(values.get("Members Choosing to Leave the Plan"), Some(2.0));
    }

    #[test]
    fn baseline_is_reproducible_after_edits() {
        let catalog = init_catalog();
        let mut edited = baseline(&catalog);
        edited
            .set("Customer Service Rating", 5.0)
            .expect("metric should exist");
        edited
            .set("Complaints About the Health Plan", 4.0)
            .expect("metric should exist");
        assert_ne!(edited, baseline(&catalog));
        assert_eq!(baseline(&catalog), baseline(&catalog));
    }
}
