//! Shared Qiita API v2 client.
//!
//! One `QiitaClient` (and its connection pool) serves every Qiita tool call.
//! The bearer token is never stored on the client: each request is built
//! through [`QiitaClient::request`] with the caller's [`AuthContext`].

use reqwest::{Method, RequestBuilder};
use rmcp::{RoleServer, service::RequestContext};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::core::auth::AuthContext;
use crate::core::config::{Config, CredentialsConfig};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::build_http_client;

#[derive(Debug, Clone)]
pub struct QiitaClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialsConfig,
}

impl QiitaClient {
    /// Create the client from the server configuration.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        Ok(Self {
            http: build_http_client(&config.upstream)?,
            base_url: config.upstream.qiita_api_base.clone(),
            credentials: config.credentials.clone(),
        })
    }

    /// Resolve the credentials for the tool call being handled.
    ///
    /// HTTP calls use only their connection URL. The configured token is
    /// used for calls that arrive without one (STDIO).
    pub fn resolve_auth(&self, context: &RequestContext<RoleServer>) -> AuthContext {
        AuthContext::from_request_context(context)
            .unwrap_or_else(|| AuthContext::from_qiita_credentials(&self.credentials))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request to `path`, attaching the bearer token when one is known.
    pub fn request(&self, method: Method, path: &str, auth: &AuthContext) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match auth.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a read request. Non-2xx statuses fail the call.
    pub async fn read_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ToolError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Qiita responded with {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Send a write request. The upstream JSON body is returned whatever the
    /// status, so callers must inspect it for error payloads.
    pub async fn write_json(&self, request: RequestBuilder) -> Result<Value, ToolError> {
        let response = request.send().await?;
        debug!("Qiita responded with {}", response.status());
        Ok(response.json::<Value>().await?)
    }
}

/// Qiita item ids are alphanumeric; anything else would escape the path.
pub fn validate_item_id(item_id: &str) -> Result<(), ToolError> {
    if item_id.is_empty() || !item_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ToolError::invalid_arguments(format!(
            "item_id must be a non-empty alphanumeric Qiita item id, got '{}'",
            item_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubUpstream;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("c686397e4a0f4f11683d").is_ok());
        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("../authenticated_user").is_err());
    }

    #[tokio::test]
    async fn test_token_becomes_bearer_header() {
        let stub = StubUpstream::start(200, serde_json::json!({ "id": "abc" })).await;
        let client = QiitaClient::new(&stub.config()).unwrap();
        let auth = AuthContext::new(Some("secret".to_string()), None);

        let _: Value = client
            .read_json(client.request(Method::GET, "items/abc", &auth))
            .await
            .unwrap();

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/api/v2/items/abc");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer secret"));
        assert!(requests[0].user_agent.is_some());
    }

    #[tokio::test]
    async fn test_no_token_sends_no_header() {
        let stub = StubUpstream::start(200, serde_json::json!([])).await;
        let client = QiitaClient::new(&stub.config()).unwrap();

        let _: Value = client
            .read_json(client.request(Method::GET, "items", &AuthContext::default()))
            .await
            .unwrap();

        assert!(stub.requests()[0].authorization.is_none());
    }

    #[tokio::test]
    async fn test_read_fails_on_non_success() {
        let stub = StubUpstream::start(401, serde_json::json!({ "type": "unauthorized" })).await;
        let client = QiitaClient::new(&stub.config()).unwrap();

        let err = client
            .read_json::<Value>(client.request(Method::GET, "items", &AuthContext::default()))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("unauthorized"));
    }

    #[tokio::test]
    async fn test_write_passes_error_body_through() {
        let stub = StubUpstream::start(
            403,
            serde_json::json!({ "message": "Forbidden", "type": "forbidden" }),
        )
        .await;
        let client = QiitaClient::new(&stub.config()).unwrap();

        let value = client
            .write_json(client.request(Method::POST, "items", &AuthContext::default()))
            .await
            .unwrap();

        assert_eq!(value["type"], "forbidden");
    }
}
