use crate::assessment::domain::UnknownDimension;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Errors surfaced to the command-line collaborator. Scoring itself never fails.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Answers(AnswerInputError),
    Dimension(UnknownDimension),
    Json(serde_json::Error),
}

/// Rejected answer input, before anything reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum AnswerInputError {
    #[error("answers file is not a JSON object of question id to value: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("expected ID=VALUE with a non-negative integer ID, got '{0}'")]
    InvalidPair(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Answers(err) => write!(f, "answer input error: {}", err),
            AppError::Dimension(err) => write!(f, "{}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Answers(err) => Some(err),
            AppError::Dimension(err) => Some(err),
            AppError::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<AnswerInputError> for AppError {
    fn from(value: AnswerInputError) -> Self {
        Self::Answers(value)
    }
}

impl From<UnknownDimension> for AppError {
    fn from(value: UnknownDimension) -> Self {
        Self::Dimension(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
