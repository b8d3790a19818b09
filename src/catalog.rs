use crate::error::{Result, SimError};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subgroup {
    pub name: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub subgroups: Vec<Subgroup>,
}

/// Hierarchy of every scorable metric. Declaration order is catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    domains: Vec<Domain>,
}

type SubgroupSpec<'a> = (&'a str, &'a [(&'a str, &'a str)]);
type DomainSpec<'a> = (&'a str, &'a [SubgroupSpec<'a>]);

const STAR_CATALOG: &[DomainSpec<'static>] = &[
    (
        "Part D Measures",
        &[
            (
                "Medication Adherence",
                &[
                    (
                        "Medication Adherence - Diabetes",
                        "Percentage of members with diabetes who adhere to their medication regimen.",
                    ),
                    (
                        "Medication Adherence - Hypertension",
                        "Percentage of members with high blood pressure who take their meds as prescribed.",
                    ),
                    (
                        "Medication Adherence - Cholesterol",
                        "Statin adherence among members with cardiovascular risk.",
                    ),
                ],
            ),
            (
                "High-Risk Medication Use",
                &[(
                    "Use of High-Risk Medications in the Elderly",
                    "Minimizing risky medications prescribed to older adults.",
                )],
            ),
            (
                "MTM Program Completion Rate",
                &[(
                    "MTM Program Completion Rate for CMR",
                    "Percent of members who completed a Comprehensive Medication Review.",
                )],
            ),
        ],
    ),
    (
        "Member Experience (CAHPS)",
        &[
            (
                "Access and Service",
                &[
                    (
                        "Getting Needed Care",
                        "Members' ease of getting appointments and services.",
                    ),
                    (
                        "Getting Appointments and Care Quickly",
                        "Timeliness of access to care.",
                    ),
                ],
            ),
            (
                "Customer Service",
                &[(
                    "Customer Service Rating",
                    "Satisfaction with plan's customer service interactions.",
                )],
            ),
        ],
    ),
    (
        "Member Complaints and Improvement",
        &[
            (
                "Complaints and Disenrollment",
                &[
                    (
                        "Members Choosing to Leave the Plan",
                        "Rate at which members voluntarily leave the plan.",
                    ),
                    (
                        "Complaints About the Health Plan",
                        "Number of complaints filed about the plan.",
                    ),
                ],
            ),
            (
                "Appeals",
                &[
                    (
                        "Timeliness of Appeals Decisions",
                        "Time taken to resolve member appeals.",
                    ),
                    (
                        "Plan Makes Timely Decisions About Appeals",
                        "Adherence to decision timelines.",
                    ),
                ],
            ),
        ],
    ),
];

/// The Medicare STAR catalog shipped with the simulator.
pub fn init_catalog() -> Catalog {
    let domains = STAR_CATALOG
        .iter()
        .map(|(domain, subgroups)| Domain {
            name: (*domain).to_string(),
            subgroups: subgroups
                .iter()
                .map(|(subgroup, metrics)| Subgroup {
                    name: (*subgroup).to_string(),
                    metrics: metrics
                        .iter()
                        .map(|(name, description)| Metric {
                            name: (*name).to_string(),
                            description: (*description).to_string(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();
    Catalog { domains }
}

impl Catalog {
    /// Builds a catalog, rejecting metric names that appear more than once.
    pub fn new(domains: Vec<Domain>) -> Result<Self> {
        let mut seen = HashSet::new();
        for domain in &domains {
            for subgroup in &domain.subgroups {
                for metric in &subgroup.metrics {
                    if !seen.insert(metric.name.as_str()) {
                        return Err(SimError::CatalogInconsistency(format!(
                            "duplicate metric name '{}' in {} / {}",
                            metric.name, domain.name, subgroup.name
                        )));
                    }
                }
            }
        }
        Ok(Self { domains })
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.domains
            .iter()
            .flat_map(|domain| domain.subgroups.iter())
            .flat_map(|subgroup| subgroup.metrics.iter())
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics().map(|metric| metric.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.metrics().count()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics().next().is_none()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics().find(|metric| metric.name == name)
    }

    pub fn locate(&self, name: &str) -> Option<(&Domain, &Subgroup, &Metric)> {
        self.domains.iter().find_map(|domain| {
            domain.subgroups.iter().find_map(|subgroup| {
                subgroup
                    .metrics
                    .iter()
                    .find(|metric| metric.name == name)
                    .map(|metric| (domain, subgroup, metric))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str) -> Metric {
        Metric {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn star_catalog_has_three_domains_and_twelve_metrics() {
        let catalog = init_catalog();
        assert_eq!(catalog.domains().len(), 3);
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn metric_names_follow_declaration_order() {
        let catalog = init_catalog();
        let names = catalog.metric_names().collect::<Vec<_>>();
        assert_eq!(names.first(), Some(&"Medication Adherence - Diabetes"));
        assert_eq!(
            names.last(),
            Some(&"Plan Makes Timely Decisions About Appeals")
        );
    }

    #[test]
    fn star_catalog_names_are_unique() {
        let catalog = init_catalog();
        assert!(Catalog::new(catalog.domains().to_vec()).is_ok());
    }

    #[test]
    fn locate_returns_domain_and_subgroup() {
        let catalog = init_catalog();
        let (domain, subgroup, metric) = catalog
            .locate("Customer Service Rating")
            .expect("metric should be in catalog");
        assert_eq!(domain.name, "Member Experience (CAHPS)");
        assert_eq!(subgroup.name, "Customer Service");
        assert_eq!(
            metric.description,
            "Satisfaction with plan's customer service interactions."
        );
        assert!(catalog.locate("Dental Coverage").is_none());
    }

    #[test]
    fn new_rejects_duplicate_metric_names() {
        let domains = vec![
            Domain {
                name: "A".to_string(),
                subgroups: vec![Subgroup {
                    name: "a".to_string(),
                    metrics: vec![metric("Same")],
                }],
            },
            Domain {
                name: "B".to_string(),
                subgroups: vec![Subgroup {
                    name: "b".to_string(),
                    metrics: vec![metric("Same")],
                }],
            },
        ];
        let err = Catalog::new(domains).expect_err("duplicate should be rejected");
        assert!(matches!(err, SimError::CatalogInconsistency(_)));
        assert!(err.to_string().contains("duplicate metric name 'Same'"));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).expect("empty catalog should build");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
