//! Qiita / Zenn publishing MCP server.
//!
//! This crate exposes the Qiita API v2 and Zenn's GitHub-based publishing
//! flow as Model Context Protocol tools, so an agent can search, read and
//! publish articles.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, connection credentials, the server
//!   handler and the transports
//! - **domains**: business logic
//!   - **tools**: the Qiita and Zenn tools
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_publish_mcp_server::core::{Config, McpServer, transport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     transport::serve(config.transport, server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
