//! Tool Registry - static metadata for all tools.
//!
//! The registry lists tool names and `Tool` models without building the
//! upstream clients, for the HTTP info endpoint and for consistency checks
//! against the router.

use rmcp::model::Tool;

use super::definitions::{
    GetMyQiitaArticlesTool, GetQiitaItemTool, GetQiitaMarkdownRulesTool, PostQiitaArticleTool,
    PostZennArticleTool, SearchQiitaItemsTool, UpdateQiitaArticleTool,
};

pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            SearchQiitaItemsTool::NAME,
            GetQiitaItemTool::NAME,
            GetMyQiitaArticlesTool::NAME,
            PostQiitaArticleTool::NAME,
            UpdateQiitaArticleTool::NAME,
            GetQiitaMarkdownRulesTool::NAME,
            PostZennArticleTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchQiitaItemsTool::to_tool(),
            GetQiitaItemTool::to_tool(),
            GetMyQiitaArticlesTool::to_tool(),
            PostQiitaArticleTool::to_tool(),
            UpdateQiitaArticleTool::to_tool(),
            GetQiitaMarkdownRulesTool::to_tool(),
            PostZennArticleTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"search_qiita_items"));
        assert!(names.contains(&"post_zenn_article"));
    }

    #[test]
    fn test_read_tools_are_annotated_read_only() {
        for tool in ToolRegistry::get_all_tools() {
            let read_only = tool
                .annotations
                .as_ref()
                .and_then(|a| a.read_only_hint)
                .unwrap_or(false);
            let expected = !matches!(
                tool.name.as_ref(),
                "post_qiita_article" | "update_qiita_article" | "post_zenn_article"
            );
            assert_eq!(read_only, expected, "unexpected readOnlyHint for {}", tool.name);
        }
    }
}
