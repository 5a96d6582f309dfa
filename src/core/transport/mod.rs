//! Transport layer for the MCP server.
//!
//! This module provides two transport implementations:
//! - **HTTP**: rmcp streamable HTTP behind axum (default) - feature: `http`
//! - **STDIO**: Standard input/output - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "http")]
pub use config::HttpConfig;

use tracing::info;

use crate::core::McpServer;

/// Serve `server` on the configured transport until it shuts down.
pub async fn serve(config: TransportConfig, server: McpServer) -> TransportResult<()> {
    info!("Starting transport: {}", config.description());

    match config {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::StdioTransport::run(server).await,
        #[cfg(feature = "http")]
        TransportConfig::Http(cfg) => self::http::HttpTransport::new(cfg).run(server).await,
    }
}
