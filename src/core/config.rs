//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default Qiita API v2 base URL.
pub const DEFAULT_QIITA_API_BASE: &str = "https://qiita.com/api/v2/";

/// Default GitHub REST API base URL (used for Zenn repository dispatch).
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream API endpoints and client settings.
    pub upstream: UpstreamConfig,

    /// Fallback credentials used when the connection URL carries none.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Upstream HTTP endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Qiita API base, with a trailing slash.
    pub qiita_api_base: String,

    /// GitHub API base, without a trailing slash.
    pub github_api_base: String,

    /// Timeout applied to every outbound request, in seconds.
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Outbound request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Credentials used when the transport carries no connection parameters
/// (STDIO), or when the connection URL leaves one out.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Qiita personal access token.
    pub qiita_token: Option<String>,

    /// GitHub token allowed to send dispatch events to the Zenn repository.
    pub zenn_token: Option<String>,

    /// Zenn-linked repository, as `owner/repo`.
    pub zenn_repo_name: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("qiita_token", &self.qiita_token.as_ref().map(|_| "[REDACTED]"))
            .field("zenn_token", &self.zenn_token.as_ref().map(|_| "[REDACTED]"))
            .field("zenn_repo_name", &self.zenn_repo_name)
            .finish()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            qiita_api_base: DEFAULT_QIITA_API_BASE.to_string(),
            github_api_base: DEFAULT_GITHUB_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "blog-publish-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_QIITA_TOKEN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base) = std::env::var("MCP_QIITA_API_BASE") {
            config.upstream.qiita_api_base = normalize_qiita_base(&base);
        }

        if let Ok(base) = std::env::var("MCP_GITHUB_API_BASE") {
            config.upstream.github_api_base = base.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = std::env::var("MCP_UPSTREAM_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.upstream.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid MCP_UPSTREAM_TIMEOUT_SECS: {}", timeout),
            }
        }

        config.credentials.qiita_token = non_empty_var("MCP_QIITA_TOKEN");
        config.credentials.zenn_token = non_empty_var("MCP_ZENN_TOKEN");
        config.credentials.zenn_repo_name = non_empty_var("MCP_ZENN_REPO_NAME");

        if config.credentials.qiita_token.is_some() {
            info!("Fallback Qiita token loaded from environment");
        }
        if config.credentials.zenn_token.is_some() {
            info!("Fallback Zenn dispatch token loaded from environment");
        }

        config
    }

    /// Check the settings that would otherwise only fail on the first tool call.
    pub fn validate(&self) -> Result<()> {
        for (name, base) in [
            ("qiita_api_base", &self.upstream.qiita_api_base),
            ("github_api_base", &self.upstream.github_api_base),
        ] {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(Error::config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, base
                )));
            }
        }

        if self.upstream.timeout_secs == 0 {
            return Err(Error::config("upstream timeout must be at least 1 second"));
        }

        Ok(())
    }
}

/// Qiita paths are joined onto the base, so it must end with a slash.
fn normalize_qiita_base(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_QIITA_TOKEN", "qiita_test_token");
            std::env::set_var("MCP_ZENN_REPO_NAME", "octocat/zenn-content");
            std::env::set_var("MCP_ZENN_TOKEN", "   ");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.qiita_token.as_deref(),
            Some("qiita_test_token")
        );
        assert_eq!(
            config.credentials.zenn_repo_name.as_deref(),
            Some("octocat/zenn-content")
        );
        assert!(config.credentials.zenn_token.is_none());
        unsafe {
            std::env::remove_var("MCP_QIITA_TOKEN");
            std::env::remove_var("MCP_ZENN_REPO_NAME");
            std::env::remove_var("MCP_ZENN_TOKEN");
        }
    }

    #[test]
    fn test_api_base_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_QIITA_API_BASE", "http://127.0.0.1:9000/api/v2");
            std::env::set_var("MCP_GITHUB_API_BASE", "http://127.0.0.1:9001/");
        }
        let config = Config::from_env();
        assert_eq!(
            config.upstream.qiita_api_base,
            "http://127.0.0.1:9000/api/v2/"
        );
        assert_eq!(config.upstream.github_api_base, "http://127.0.0.1:9001");
        unsafe {
            std::env::remove_var("MCP_QIITA_API_BASE");
            std::env::remove_var("MCP_GITHUB_API_BASE");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            qiita_token: Some("super_secret_key".to_string()),
            zenn_token: Some("ghp_secret".to_string()),
            zenn_repo_name: Some("octocat/zenn".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(!debug_str.contains("ghp_secret"));
        assert!(debug_str.contains("octocat/zenn"));
    }

    #[test]
    fn test_default_upstreams() {
        let config = Config::default();
        assert_eq!(config.upstream.qiita_api_base, "https://qiita.com/api/v2/");
        assert_eq!(config.upstream.github_api_base, "https://api.github.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base() {
        let mut config = Config::default();
        config.upstream.github_api_base = "api.github.com".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
