//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Ways serving the MCP server can fail.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP listener could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake with the client failed.
    #[error("MCP session failed to start: {0}")]
    SessionInit(String),

    /// A running MCP session or HTTP server stopped with an error.
    #[error("MCP server stopped: {0}")]
    Serve(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn session_init(err: impl std::fmt::Display) -> Self {
        Self::SessionInit(err.to_string())
    }

    pub fn serve(err: impl std::fmt::Display) -> Self {
        Self::Serve(err.to_string())
    }
}
