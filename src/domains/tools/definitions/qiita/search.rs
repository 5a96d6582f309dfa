//! Qiita article search tool.
//!
//! Searches public Qiita articles (`GET /api/v2/items?query=...`) and projects
//! each hit into an [`ArticleSummary`].

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::client::QiitaClient;
use super::types::{ArticleSummary, UpstreamItem};
use crate::core::auth::AuthContext;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    clamp_page, clamp_per_page, into_call_result, parse_arguments,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the article search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchQiitaItemsParams {
    /// Qiita search query.
    #[schemars(description = "Search query, e.g. \"tag:python fastmcp\"")]
    pub query: String,

    /// Page number (1..).
    #[serde(default = "default_page")]
    #[schemars(description = "Page number, starting at 1 (default: 1)")]
    pub page: u32,

    /// Results per page (1..100).
    #[serde(default = "default_per_page")]
    #[schemars(description = "Results per page, 1-100 (default: 10)")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Structured output for search results.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SearchQiitaItemsResult {
    pub results: Vec<ArticleSummary>,
}

// ============================================================================
// Tool Definition
// ============================================================================

pub struct SearchQiitaItemsTool;

impl SearchQiitaItemsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_qiita_items";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search public Qiita articles by keyword (GET /api/v2/items). \
         Supports Qiita search syntax such as \"tag:python\" or \"user:alice\". \
         Returns id, title, url, like and stock counts, timestamps, author, tag names and a 200 character HTML snippet.";

    /// Execute the search.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(
        params: &SearchQiitaItemsParams,
        client: &QiitaClient,
        auth: &AuthContext,
    ) -> Result<Value, ToolError> {
        let page = clamp_page(params.page);
        let per_page = clamp_per_page(params.per_page);
        info!("Searching Qiita items (page {}, per_page {})", page, per_page);

        let request = client.request(Method::GET, "items", auth).query(&[
            ("query", params.query.clone()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]);
        let items: Vec<UpstreamItem> = client.read_json(request).await?;

        let result = SearchQiitaItemsResult {
            results: items.into_iter().map(ArticleSummary::from).collect(),
        };
        info!("Found {} item(s)", result.results.len());

        Ok(serde_json::to_value(result)?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchQiitaItemsParams>(),
            annotations: Some(ToolAnnotations::new().read_only(true).open_world(true)),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the shared Qiita client.
    pub fn create_route<S>(client: Arc<QiitaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let auth = client.resolve_auth(&ctx.request_context);
            let client = client.clone();
            async move {
                let params: SearchQiitaItemsParams = parse_arguments(args)?;
                Ok(into_call_result(Self::execute(&params, &client, &auth).await))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
