//! Error types for FitGenie.

pub mod unified;

pub use unified::{ErrorKind, RecoverySuggestion};

use thiserror::Error;

/// The single message shown to the user when plan generation fails.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate plan. Please verify your API key and try again.";

/// Primary error type for all FitGenie operations.
#[derive(Error, Debug)]
pub enum FitError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("No usable response from the model")]
    EmptyResponse,

    #[error("Model stopped before finishing the plan ({0})")]
    Truncated(crate::types::FinishReason),

    #[error("Malformed plan: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl FitError {
    /// Create an API error from a status code and body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error for one profile field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Classify this error into a kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_)
            | Self::Api { .. }
            | Self::Authentication(_)
            | Self::RateLimited { .. } => ErrorKind::Transport,
            Self::EmptyResponse | Self::Truncated(_) | Self::Parse(_) => ErrorKind::Parse,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Configuration(_) | Self::Io(_) => ErrorKind::Configuration,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            Self::Authentication(_) => RecoverySuggestion::CheckCredentials,
            Self::Api { status, .. } if matches!(*status, 401 | 403) => {
                RecoverySuggestion::CheckCredentials
            }
            Self::RateLimited { .. } | Self::Network(_) => RecoverySuggestion::ResubmitLater,
            Self::Api { status, .. } if *status >= 500 => RecoverySuggestion::ResubmitLater,
            Self::EmptyResponse | Self::Truncated(_) | Self::Parse(_) => {
                RecoverySuggestion::Resubmit
            }
            Self::Validation { .. } => RecoverySuggestion::FixProfile,
            Self::Configuration(_) | Self::Io(_) => RecoverySuggestion::CheckConfiguration,
            _ => RecoverySuggestion::ContactSupport,
        }
    }

    /// Message shown to the end user.
    ///
    /// Transport and parse failures are deliberately indistinguishable here.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Transport | ErrorKind::Parse => GENERATION_FAILED_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FitError>;
