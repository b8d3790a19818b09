use indexmap::IndexMap;

pub const GENERIC_ADVICE: &str = "Focus operational improvements on this area.";

const BUILTIN_ADVICE: &[(&str, &str)] = &[
    (
        "Medication Adherence - Diabetes",
        "Invest in pharmacy outreach and digital refill reminders to improve medication adherence.",
    ),
    (
        "Customer Service Rating",
        "Enhance call center training and reduce wait times to improve member satisfaction.",
    ),
    (
        "Timeliness of Appeals Decisions",
        "Automate case handling workflows to accelerate resolution and ensure compliance.",
    ),
    (
        "Plan Makes Timely Decisions About Appeals",
        "Implement SLA dashboards and audit queues to reduce delays in decisions.",
    ),
    (
        "Getting Appointments and Care Quickly",
        "Expand provider network or offer telehealth to improve timely access.",
    ),
];

/// Remediation text keyed by exact metric name.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryTable {
    entries: IndexMap<String, String>,
}

impl Default for AdvisoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AdvisoryTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ADVICE
                .iter()
                .map(|(name, advice)| ((*name).to_string(), (*advice).to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Layers entries over the table; later entries replace earlier ones.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, advice) in overrides {
            self.entries.insert(name.into(), advice.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn advice_for(&self, name: &str) -> &str {
        self.get(name).unwrap_or(GENERIC_ADVICE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
