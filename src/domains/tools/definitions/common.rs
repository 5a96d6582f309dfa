//! Common utilities shared across Qiita and Zenn tools.
//!
//! This module provides the shared HTTP client builder, argument parsing,
//! pagination clamping and `CallToolResult` formatting helpers.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::core::config::UpstreamConfig;
use crate::domains::tools::ToolError;

/// User agent sent with every upstream request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Largest page size the Qiita API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Build the connection pool shared by all calls to one upstream.
pub fn build_http_client(upstream: &UpstreamConfig) -> Result<reqwest::Client, ToolError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(upstream.timeout())
        .build()?;
    Ok(client)
}

/// Deserialize tool call arguments into the tool's parameter struct.
pub fn parse_arguments<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, McpError> {
    let value = Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|e| {
        let error = ToolError::invalid_arguments(e.to_string());
        McpError::invalid_params(error.to_string(), None)
    })
}

/// Page numbers start at 1.
pub fn clamp_page(page: u32) -> u32 {
    page.max(1)
}

/// Validate and clamp page size to allowed range (1-100).
pub fn clamp_per_page(per_page: u32) -> u32 {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying a JSON document.
///
/// Objects are also attached as structured content; other JSON values are
/// returned as text only.
pub fn json_result(value: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

    if value.is_object() {
        CallToolResult {
            content: vec![Content::text(text)],
            structured_content: Some(value),
            is_error: Some(false),
            meta: None,
        }
    } else {
        CallToolResult::success(vec![Content::text(text)])
    }
}

/// Turn a tool outcome into the result sent back to the client.
pub fn into_call_result(outcome: Result<Value, ToolError>) -> CallToolResult {
    match outcome {
        Ok(value) => json_result(value),
        Err(e) => error_result(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_clamp_pagination() {
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(3), 3);
        assert_eq!(clamp_per_page(0), 1);
        assert_eq!(clamp_per_page(20), 20);
        assert_eq!(clamp_per_page(500), 100);
    }

    #[test]
    fn test_json_result_object_is_structured() {
        let result = json_result(serde_json::json!({ "message": "Nothing to update." }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "message": "Nothing to update." }))
        );
    }

    #[test]
    fn test_json_result_array_is_text_only() {
        let result = json_result(serde_json::json!([1, 2]));
        assert!(result.structured_content.is_none());
        match &result.content[0].raw {
            RawContent::Text(text) => assert!(text.text.contains('1')),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_error_outcome_sets_is_error() {
        let outcome = Err(ToolError::Upstream {
            status: 404,
            body: "Not found".to_string(),
        });
        let result = into_call_result(outcome);
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert!(text.text.contains("404")),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_parse_arguments_rejects_wrong_type() {
        #[derive(serde::Deserialize)]
        struct Params {
            #[allow(dead_code)]
            page: u32,
        }

        let mut args = JsonObject::new();
        args.insert("page".to_string(), serde_json::json!("one"));
        let err = parse_arguments::<Params>(Some(args)).err().unwrap();
        assert!(err.message.contains("Invalid arguments"));
    }
}
