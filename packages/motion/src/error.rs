//! Error type for configuration loading and validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("failed to parse menu config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to serialize menu config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("invalid menu config: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

impl MotionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
