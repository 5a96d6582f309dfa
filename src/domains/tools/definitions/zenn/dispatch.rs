//! GitHub repository-dispatch client.
//!
//! Zenn publishes articles from a linked GitHub repository, so "posting to
//! Zenn" means sending a `repository_dispatch` event that a workflow in that
//! repository turns into an article file.

use rmcp::{RoleServer, service::RequestContext};
use serde::Serialize;
use tracing::debug;

use crate::core::auth::AuthContext;
use crate::core::config::{Config, CredentialsConfig};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::build_http_client;

/// Event type the linked repository's workflow listens for.
pub const NEW_ARTICLE_EVENT: &str = "new_article";

/// Check that `repo_name` is an `owner/repo` pair safe to put in a URL path.
pub fn validate_repo_name(repo_name: &str) -> Result<(), ToolError> {
    let valid_segment = |segment: &str| {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    };

    match repo_name.split_once('/') {
        Some((owner, repo)) if valid_segment(owner) && valid_segment(repo) => Ok(()),
        _ => Err(ToolError::invalid_arguments(format!(
            "repo_name must look like <owner>/<repo>, got '{}'",
            repo_name
        ))),
    }
}

/// Body of `POST /repos/{repo_name}/dispatches`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZennDispatchPayload {
    pub event_type: &'static str,
    pub client_payload: ZennClientPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZennClientPayload {
    pub title: String,
    pub body: String,
    /// Topics as a JSON-encoded array string, e.g. `["rust","mcp"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_json: Option<String>,
}

impl ZennDispatchPayload {
    pub fn new_article(
        title: &str,
        body: &str,
        topics: Option<&[String]>,
    ) -> Result<Self, ToolError> {
        let topics_json = topics.map(serde_json::to_string).transpose()?;
        Ok(Self {
            event_type: NEW_ARTICLE_EVENT,
            client_payload: ZennClientPayload {
                title: title.to_string(),
                body: body.to_string(),
                topics_json,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct GithubDispatchClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialsConfig,
}

impl GithubDispatchClient {
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        Ok(Self {
            http: build_http_client(&config.upstream)?,
            base_url: config.upstream.github_api_base.clone(),
            credentials: config.credentials.clone(),
        })
    }

    /// Resolve the credentials for the tool call being handled. Over HTTP
    /// both values must be on the connection URL.
    pub fn resolve_auth(&self, context: &RequestContext<RoleServer>) -> AuthContext {
        AuthContext::from_request_context(context)
            .unwrap_or_else(|| AuthContext::from_zenn_credentials(&self.credentials))
    }

    /// Send the dispatch event. The response status is not inspected.
    pub async fn dispatch(
        &self,
        repo_name: &str,
        token: &str,
        payload: &ZennDispatchPayload,
    ) -> Result<(), ToolError> {
        let url = format!("{}/repos/{}/dispatches", self.base_url, repo_name);
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(payload)
            .send()
            .await?;

        debug!("GitHub dispatch answered {}", response.status());
        Ok(())
    }
}
