use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("catalog inconsistency: {0}")]
    CatalogInconsistency(String),

    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("invalid assignment (expected NAME=VALUE): {0}")]
    InvalidAssignment(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
