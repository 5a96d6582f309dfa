//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. No connection URL exists here,
//! so tools fall back to the credentials configured through `MCP_*` vars.

use rmcp::ServiceExt;
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let credentials = &server.config().credentials;
        if credentials.qiita_token.is_none() {
            warn!("MCP_QIITA_TOKEN not set - authenticated Qiita tools will be rejected upstream");
        }
        if credentials.zenn_token.is_none() || credentials.zenn_repo_name.is_none() {
            warn!("MCP_ZENN_TOKEN / MCP_ZENN_REPO_NAME not set - post_zenn_article will fail");
        }

        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::session_init)?;

        service
            .waiting()
            .await
            .map_err(TransportError::serve)?;

        info!("STDIO transport finished");
        Ok(())
    }
}
