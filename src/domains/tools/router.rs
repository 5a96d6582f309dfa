//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! The upstream clients are created once here and shared by every route, so
//! all calls to one upstream reuse the same connection pool.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::ToolError;
use super::definitions::{
    GetMyQiitaArticlesTool, GetQiitaItemTool, GetQiitaMarkdownRulesTool, GithubDispatchClient,
    PostQiitaArticleTool, PostZennArticleTool, QiitaClient, SearchQiitaItemsTool,
    UpdateQiitaArticleTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: &Config) -> Result<ToolRouter<S>, ToolError>
where
    S: Send + Sync + 'static,
{
    let qiita = Arc::new(QiitaClient::new(config)?);
    let github = Arc::new(GithubDispatchClient::new(config)?);

    Ok(ToolRouter::new()
        .with_route(SearchQiitaItemsTool::create_route(qiita.clone()))
        .with_route(GetQiitaItemTool::create_route(qiita.clone()))
        .with_route(GetMyQiitaArticlesTool::create_route(qiita.clone()))
        .with_route(PostQiitaArticleTool::create_route(qiita.clone()))
        .with_route(UpdateQiitaArticleTool::create_route(qiita))
        .with_route(GetQiitaMarkdownRulesTool::create_route())
        .with_route(PostZennArticleTool::create_route(github)))
}
