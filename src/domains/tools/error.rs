//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream API answered a read request with a non-2xx status.
    #[error("Upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request could not be sent, timed out, or the body failed to decode.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A payload could not be converted to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required connection parameter was not supplied.
    #[error("Missing connection parameter '{param}'. {hint}")]
    MissingConnectionParam { param: &'static str, hint: String },
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "missing connection parameter" error.
    pub fn missing_connection_param(param: &'static str, hint: impl Into<String>) -> Self {
        Self::MissingConnectionParam {
            param,
            hint: hint.into(),
        }
    }

    /// HTTP status of an upstream failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
