//! Domain Errors

use thiserror::Error;

/// Common result type for remote table calls
pub type RemoteResult<T> = Result<T, RemoteOperationFailure>;

/// The single failure kind raised by any remote table call.
///
/// Carries a human-readable message that ends up in the user notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteOperationFailure {
    pub message: String,
}

impl RemoteOperationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RemoteOperationFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Backend configuration problems, raised before any controller exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_displays_message_only() {
        let err = RemoteOperationFailure::new("relation \"todos\" does not exist");
        assert_eq!(err.to_string(), "relation \"todos\" does not exist");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::Missing("SUPABASE_URL").to_string(),
            "missing configuration value: SUPABASE_URL"
        );
    }
}
