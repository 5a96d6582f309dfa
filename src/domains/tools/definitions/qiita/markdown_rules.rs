//! Reference links for writing Qiita Markdown. Static, no network call.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domains::tools::definitions::common::{json_result, parse_arguments};

pub const MARKDOWN_RESOURCES: [&str; 2] = [
    "https://help.qiita.com/ja/articles/qiita-markdown",
    "https://qiita.com/api/v2/docs",
];

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetQiitaMarkdownRulesParams {}

pub struct GetQiitaMarkdownRulesTool;

impl GetQiitaMarkdownRulesTool {
    pub const NAME: &'static str = "get_qiita_markdown_rules";

    pub const DESCRIPTION: &'static str =
        "Return reference links for Qiita Markdown syntax and the Qiita API documentation.";

    pub fn execute() -> Value {
        json!({ "resources": MARKDOWN_RESOURCES })
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetQiitaMarkdownRulesParams>(),
            annotations: Some(ToolAnnotations::new().read_only(true).open_world(false)),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                let _: GetQiitaMarkdownRulesParams = parse_arguments(args)?;
                Ok(json_result(Self::execute()))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rules_are_static() {
        assert_eq!(
            GetQiitaMarkdownRulesTool::execute(),
            json!({
                "resources": [
                    "https://help.qiita.com/ja/articles/qiita-markdown",
                    "https://qiita.com/api/v2/docs"
                ]
            })
        );
    }

    #[test]
    fn test_params_accept_empty_object() {
        assert!(serde_json::from_str::<GetQiitaMarkdownRulesParams>("{}").is_ok());
    }
}
