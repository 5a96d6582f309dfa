//! Zenn article posting tool.
//!
//! Triggers article creation in the Zenn-linked GitHub repository. The
//! GitHub token and the `owner/repo` target come from the connection URL
//! (`?token=...&repo_name=...`), never from the tool arguments.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::dispatch::{GithubDispatchClient, ZennDispatchPayload, validate_repo_name};
use crate::core::auth::AuthContext;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{error_result, parse_arguments};

/// Shown when a connection parameter is missing.
pub const CONNECTION_HINT: &str = "Connect with both parameters on the server URL, e.g. \
     https://your-server.example.com/mcp?token=<github_token>&repo_name=<owner>/<repo>";

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostZennArticleParams {
    #[schemars(description = "Article title")]
    pub title: String,

    #[schemars(description = "Article body (Markdown)")]
    pub body: String,

    #[serde(default)]
    #[schemars(description = "Zenn topics, e.g. [\"rust\", \"mcp\"]")]
    pub topics: Option<Vec<String>>,
}

// ============================================================================
// Tool Definition
// ============================================================================

pub struct PostZennArticleTool;

impl PostZennArticleTool {
    pub const NAME: &'static str = "post_zenn_article";

    pub const DESCRIPTION: &'static str = "Post an article to Zenn by sending a repository_dispatch \
         (event_type \"new_article\") to the Zenn-linked GitHub repository. \
         Requires ?token=<github_token>&repo_name=<owner>/<repo> on the connection URL. \
         Publication happens asynchronously in the repository's workflow.";

    /// Validate the connection parameters and send the dispatch event.
    #[instrument(skip_all, fields(title = %params.title))]
    pub async fn execute(
        params: &PostZennArticleParams,
        client: &GithubDispatchClient,
        auth: &AuthContext,
    ) -> Result<(), ToolError> {
        let token = auth
            .token()
            .ok_or_else(|| ToolError::missing_connection_param("token", CONNECTION_HINT))?;
        let repo_name = auth
            .repo_name()
            .ok_or_else(|| ToolError::missing_connection_param("repo_name", CONNECTION_HINT))?;
        validate_repo_name(repo_name)?;

        let payload =
            ZennDispatchPayload::new_article(&params.title, &params.body, params.topics.as_deref())?;

        info!("Dispatching new_article event to {}", repo_name);
        client.dispatch(repo_name, token, &payload).await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PostZennArticleParams>(),
            annotations: Some(ToolAnnotations::new().read_only(false).open_world(true)),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<GithubDispatchClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let auth = client.resolve_auth(&ctx.request_context);
            let client = client.clone();
            async move {
                let params: PostZennArticleParams = parse_arguments(args)?;
                match Self::execute(&params, &client, &auth).await {
                    Ok(()) => Ok(CallToolResult::success(vec![])),
                    Err(e) => Ok(error_result(&e.to_string())),
                }
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubUpstream;
    use serde_json::json;

    fn params(topics: Option<Vec<&str>>) -> PostZennArticleParams {
        PostZennArticleParams {
            title: "Zenn title".to_string(),
            body: "Zenn body".to_string(),
            topics: topics.map(|t| t.into_iter().map(String::from).collect()),
        }
    }

    fn auth(token: Option<&str>, repo_name: Option<&str>) -> AuthContext {
        AuthContext::new(token.map(String::from), repo_name.map(String::from))
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_request() {
        let stub = StubUpstream::start(204, json!(null)).await;
        let client = GithubDispatchClient::new(&stub.config()).unwrap();

        let err = PostZennArticleTool::execute(&params(None), &client, &auth(None, Some("me/zenn")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ToolError::MissingConnectionParam { param: "token", .. }
        ));
        assert!(err.to_string().contains("/mcp?token="));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_repo_name_fails_before_request() {
        let stub = StubUpstream::start(204, json!(null)).await;
        let client = GithubDispatchClient::new(&stub.config()).unwrap();

        let err = PostZennArticleTool::execute(&params(None), &client, &auth(Some("ghp"), None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ToolError::MissingConnectionParam { param: "repo_name", .. }
        ));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_repo_name_fails_before_request() {
        let stub = StubUpstream::start(204, json!(null)).await;
        let client = GithubDispatchClient::new(&stub.config()).unwrap();

        let err = PostZennArticleTool::execute(
            &params(None),
            &client,
            &auth(Some("ghp"), Some("../orgs/evil")),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_request_shape() {
        let stub = StubUpstream::start(204, json!(null)).await;
        let client = GithubDispatchClient::new(&stub.config()).unwrap();

        PostZennArticleTool::execute(
            &params(Some(vec!["a", "b"])),
            &client,
            &auth(Some("ghp_token"), Some("octocat/zenn-content")),
        )
        .await
        .unwrap();

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/repos/octocat/zenn-content/dispatches");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer ghp_token"));
        assert_eq!(requests[0].accept.as_deref(), Some("application/vnd.github+json"));
        assert_eq!(
            requests[0].body,
            Some(json!({
                "event_type": "new_article",
                "client_payload": {
                    "title": "Zenn title",
                    "body": "Zenn body",
                    "topics_json": "[\"a\",\"b\"]"
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_upstream_status_is_not_checked() {
        let stub = StubUpstream::start(404, json!({ "message": "Not Found" })).await;
        let client = GithubDispatchClient::new(&stub.config()).unwrap();

        let outcome = PostZennArticleTool::execute(
            &params(None),
            &client,
            &auth(Some("ghp_token"), Some("octocat/missing")),
        )
        .await;

        assert!(outcome.is_ok());
    }
}
