//! HTTP transport implementation.
//!
//! Serves MCP over rmcp's streamable HTTP transport. Clients connect to
//! `<rpc_path>?token=...&repo_name=...`; the query string stays attached to
//! every request of the session and is read by the tools through the
//! request parts rmcp stores in each call's extensions.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::any_service, routing::get};
use rmcp::transport::{
    StreamableHttpServerConfig,
    streamable_http_server::{StreamableHttpService, session::local::LocalSessionManager},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// State shared by the informational endpoints.
#[derive(Clone)]
struct InfoState {
    name: String,
    version: String,
    rpc_path: String,
    tools: Arc<Vec<String>>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum application for `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let info_state = InfoState {
            name: server.name().to_string(),
            version: server.version().to_string(),
            rpc_path: self.config.rpc_path.clone(),
            tools: Arc::new(server.tool_names()),
        };

        let mcp_service: StreamableHttpService<McpServer, LocalSessionManager> =
            StreamableHttpService::new(
                move || Ok(server.clone()),
                LocalSessionManager::default().into(),
                StreamableHttpServerConfig::default(),
            );

        let mut app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .with_state(info_state)
            .route(&self.config.rpc_path, any_service(mcp_service))
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (streamable HTTP, CORS {})",
            addr, cors_status
        );
        info!(
            "  → MCP:    {}?token=<token>&repo_name=<owner>/<repo>",
            self.config.rpc_path
        );
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutdown signal received");
            })
            .await
            .map_err(TransportError::serve)?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<InfoState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.name,
        "version": state.version,
        "transport": "streamable-http",
        "endpoints": {
            "mcp": state.rpc_path,
            "health": "/health"
        },
        "tools": state.tools.as_slice(),
        "authentication": "Pass ?token=<token>&repo_name=<owner>/<repo> on the MCP endpoint URL"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
