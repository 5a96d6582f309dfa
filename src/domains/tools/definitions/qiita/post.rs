//! Create a new Qiita article.
//!
//! The upstream response is returned as-is, error payloads included: a
//! rejected post (bad token, invalid tags, ...) comes back as a successful
//! tool result whose JSON carries Qiita's `message` and `type` fields.

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
use tracing::{debug, info, instrument};

use super::client::QiitaClient;
use super::types::ArticleTag;
use crate::core::auth::AuthContext;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{into_call_result, parse_arguments};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for creating an article.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostQiitaArticleParams {
    #[schemars(description = "Article title")]
    pub title: String,

    #[schemars(description = "Article body (Markdown)")]
    pub body: String,

    #[serde(default)]
    #[schemars(description = "Tags, e.g. [{\"name\":\"python\",\"versions\":[\"3.11\"]}]")]
    pub tags: Option<Vec<ArticleTag>>,

    #[serde(default)]
    #[schemars(description = "Publish as a private (limited sharing) article (default: false)")]
    pub private: bool,

    /// Accepted for compatibility; never forwarded to Qiita.
    #[serde(default)]
    #[schemars(description = "Share on Twitter when posting (currently ignored by Qiita)")]
    pub tweet: bool,

    #[serde(default)]
    #[schemars(description = "Organization url_name to attach the article to")]
    pub organization_url_name: Option<String>,
}

/// Body of `POST /api/v2/items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCreatePayload {
    pub title: String,
    pub body: String,
    pub private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ArticleTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_url_name: Option<String>,
}

impl From<&PostQiitaArticleParams> for ArticleCreatePayload {
    fn from(params: &PostQiitaArticleParams) -> Self {
        Self {
            title: params.title.clone(),
            body: params.body.clone(),
            private: params.private,
            tags: params.tags.clone().filter(|tags| !tags.is_empty()),
            organization_url_name: params
                .organization_url_name
                .clone()
                .filter(|name| !name.is_empty()),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

pub struct PostQiitaArticleTool;

impl PostQiitaArticleTool {
    pub const NAME: &'static str = "post_qiita_article";

    pub const DESCRIPTION: &'static str = "Create a new Qiita article (POST /api/v2/items). \
         Requires an access token with write_qiita scope. \
         Returns the upstream response unchanged; check it for Qiita error fields.";

    #[instrument(skip_all, fields(title = %params.title))]
    pub async fn execute(
        params: &PostQiitaArticleParams,
        client: &QiitaClient,
        auth: &AuthContext,
    ) -> Result<Value, ToolError> {
        if params.tweet {
            debug!("tweet flag is not forwarded to Qiita");
        }

        let payload = ArticleCreatePayload::from(params);
        info!("Posting Qiita article (private: {})", payload.private);

        client
            .write_json(client.request(Method::POST, "items", auth).json(&payload))
            .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PostQiitaArticleParams>(),
            annotations: Some(ToolAnnotations::new().read_only(false).open_world(true)),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<QiitaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let auth = client.resolve_auth(&ctx.request_context);
            let client = client.clone();
            async move {
                let params: PostQiitaArticleParams = parse_arguments(args)?;
                Ok(into_call_result(Self::execute(&params, &client, &auth).await))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
