use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("not a toggle icon: {0}")]
    UnknownIcon(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid accent color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("hue threshold {0} outside 0..=180 degrees")]
    InvalidThreshold(f64),
}
