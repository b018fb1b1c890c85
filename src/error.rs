//! Error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, DeployError>;

/// Everything that can make a deployment invocation fail
#[derive(Error, Debug)]
pub enum DeployError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not a JSON object
    #[error("Invalid JSON in configuration file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration file exists but could not be read
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing or invalid CLI parameters
    #[error("{0}")]
    Validation(String),

    /// A field the tool reads is absent from the configuration
    #[error("Configuration is missing required field `{0}`")]
    MissingField(&'static str),

    /// Remote API answered with a non-success status
    #[error("API request failed. Status: {status}\nResponse: {body}")]
    Api { status: u16, body: String },

    /// Request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Errors raised while loading the configuration file
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DeployError::ConfigNotFound { .. }
                | DeployError::ConfigParse { .. }
                | DeployError::ConfigRead { .. }
        )
    }

    /// Errors raised by the HTTP exchange itself
    pub fn is_request_error(&self) -> bool {
        matches!(self, DeployError::Api { .. } | DeployError::Transport(_))
    }

    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            DeployError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
