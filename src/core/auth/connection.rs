use rmcp::{RoleServer, service::RequestContext};
use tracing::warn;

use crate::core::config::CredentialsConfig;

/// Credentials resolved for a single tool call.
///
/// HTTP calls take their values from the query string of the connection
/// URL and nothing else. Calls arriving without an HTTP request (STDIO)
/// use the configured credentials instead.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
    repo_name: Option<String>,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("repo_name", &self.repo_name)
            .finish()
    }
}

impl AuthContext {
    /// Build a context from explicit values. Blank strings count as absent.
    pub fn new(token: Option<String>, repo_name: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            repo_name: repo_name.filter(|r| !r.trim().is_empty()),
        }
    }

    /// Parse `token` and `repo_name` out of a raw query string.
    ///
    /// Unknown keys are ignored and the first occurrence of a repeated key
    /// wins. A malformed query yields an empty context.
    pub fn from_query(query: &str) -> Self {
        let pairs = match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!("Ignoring malformed connection query string: {}", e);
                return Self::default();
            }
        };

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        Self::new(first("token"), first("repo_name"))
    }

    /// Read the connection parameters from the HTTP request parts.
    #[cfg(feature = "http")]
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        parts.uri.query().map(Self::from_query).unwrap_or_default()
    }

    /// Connection parameters of the tool call being handled.
    ///
    /// The streamable HTTP transport stores the inbound request parts in the
    /// request extensions. `None` means the call did not arrive over HTTP.
    #[cfg(feature = "http")]
    pub fn from_request_context(context: &RequestContext<RoleServer>) -> Option<Self> {
        context
            .extensions
            .get::<http::request::Parts>()
            .map(Self::from_parts)
    }

    #[cfg(not(feature = "http"))]
    pub fn from_request_context(_context: &RequestContext<RoleServer>) -> Option<Self> {
        None
    }

    /// Context holding the configured Qiita token.
    pub fn from_qiita_credentials(credentials: &CredentialsConfig) -> Self {
        Self::new(credentials.qiita_token.clone(), None)
    }

    /// Context holding the configured Zenn dispatch credentials.
    pub fn from_zenn_credentials(credentials: &CredentialsConfig) -> Self {
        Self::new(
            credentials.zenn_token.clone(),
            credentials.zenn_repo_name.clone(),
        )
    }

    /// Bearer token for upstream calls, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Target repository (`owner/repo`), if any.
    pub fn repo_name(&self) -> Option<&str> {
        self.repo_name.as_deref()
    }
}
