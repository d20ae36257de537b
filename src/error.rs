use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Top-level failure surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Telemetry(#[from] TelemetryError),
    #[error("invalid frequent flyer pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application payload: {0}")]
    Json(#[from] serde_json::Error),
}
