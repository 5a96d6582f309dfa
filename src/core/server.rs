//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool,
//! and the ToolRouter is built in `domains/tools/router.rs`. Adding a tool
//! does not require modifying this file.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;

/// Instructions sent to clients on initialization.
pub const SERVER_INSTRUCTIONS: &str = "MCP server for the Qiita API and Zenn publishing.\n\
Tools:\n\
- search_qiita_items: keyword search over public Qiita articles\n\
- get_qiita_item: fetch one Qiita article by id\n\
- get_my_qiita_articles: list your own Qiita articles (token required)\n\
- post_qiita_article: create a Qiita article (write_qiita token required)\n\
- update_qiita_article: update a Qiita article (write_qiita token required)\n\
- get_qiita_markdown_rules: reference links for Qiita Markdown\n\
- post_zenn_article: publish to Zenn through the linked GitHub repository\n\
Pass credentials on the connection URL: /mcp?token=<token>&repo_name=<owner>/<repo>.";

/// The main MCP server handler.
///
/// Cloning is cheap: the router shares the upstream clients through `Arc`s,
/// so every session served by the HTTP transport reuses the same pools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let tool_router = build_tool_router::<Self>(&config)?;
        Ok(Self {
            config: Arc::new(config),
            tool_router,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List the names of all routed tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_exposes_all_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let names = server.tool_names();
        assert_eq!(names.len(), 7);
        assert!(names.iter().any(|n| n == "post_zenn_article"));
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("repo_name"));
    }
}
