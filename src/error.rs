use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engine and metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("no processes to schedule")]
    NoProcesses,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

impl ScheduleError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors loading a scenario configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}
