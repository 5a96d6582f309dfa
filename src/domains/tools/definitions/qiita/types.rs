//! Qiita item shapes shared by the Qiita tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of characters of rendered HTML kept in a search snippet.
pub const SNIPPET_CHARS: usize = 200;

/// A tag attached to a new or updated article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArticleTag {
    /// Tag name, e.g. "rust".
    pub name: String,

    /// Optional versions, e.g. ["1.80"].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
}

/// The subset of an upstream Qiita item the search projection reads.
///
/// Every field is optional so partial or null upstream fields project to
/// `null` instead of failing the whole search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub likes_count: Option<i64>,
    pub stocks_count: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub user: Option<UpstreamUser>,
    pub tags: Option<Vec<UpstreamTag>>,
    pub rendered_body: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamUser {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamTag {
    pub name: Option<String>,
}

/// Search result projection of a Qiita item.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ArticleSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub likes_count: Option<i64>,
    pub stocks_count: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub user: SummaryUser,
    pub tags: Vec<String>,
    /// First 200 characters of the rendered HTML body.
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SummaryUser {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl From<UpstreamItem> for ArticleSummary {
    fn from(item: UpstreamItem) -> Self {
        let user = item.user.unwrap_or_default();
        let snippet = item
            .rendered_body
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(SNIPPET_CHARS)
            .collect();

        Self {
            id: item.id,
            title: item.title,
            url: item.url,
            likes_count: item.likes_count,
            stocks_count: item.stocks_count,
            created_at: item.created_at,
            updated_at: item.updated_at,
            user: SummaryUser {
                id: user.id,
                name: user.name,
            },
            tags: item
                .tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|t| t.name)
                .collect(),
            snippet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(value: serde_json::Value) -> ArticleSummary {
        serde_json::from_value::<UpstreamItem>(value).unwrap().into()
    }

    #[test]
    fn test_projection_keeps_listed_fields() {
        let summary = project(serde_json::json!({
            "id": "c686397e4a0f4f11683d",
            "title": "Rust の所有権",
            "url": "https://qiita.com/alice/items/c686397e4a0f4f11683d",
            "likes_count": 12,
            "stocks_count": 3,
            "created_at": "2024-01-01T00:00:00+09:00",
            "updated_at": "2024-01-02T00:00:00+09:00",
            "user": { "id": "alice", "name": "Alice", "followers_count": 10 },
            "tags": [{ "name": "rust", "versions": [] }, { "name": "ownership" }],
            "rendered_body": "<p>hello</p>",
            "body": "hello"
        }));

        assert_eq!(summary.id.as_deref(), Some("c686397e4a0f4f11683d"));
        assert_eq!(summary.likes_count, Some(12));
        assert_eq!(summary.user.name.as_deref(), Some("Alice"));
        assert_eq!(summary.tags, vec!["rust", "ownership"]);
        assert_eq!(summary.snippet, "<p>hello</p>");
    }

    #[test]
    fn test_snippet_is_200_char_prefix() {
        let body: String = "あ".repeat(250);
        let summary = project(serde_json::json!({ "rendered_body": body }));
        assert_eq!(summary.snippet.chars().count(), SNIPPET_CHARS);
        assert!(body.starts_with(&summary.snippet));
    }

    #[test]
    fn test_missing_fields_project_to_empty() {
        let summary = project(serde_json::json!({ "rendered_body": null, "user": null }));
        assert_eq!(summary.snippet, "");
        assert!(summary.tags.is_empty());
        assert!(summary.user.id.is_none());
        assert!(summary.title.is_none());
    }
}
