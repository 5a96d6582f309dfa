//! List the authenticated user's own Qiita articles.
//!
//! Requires a token with the `read_qiita` scope; without one Qiita answers
//! 401 and the call fails.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::client::QiitaClient;
use crate::core::auth::AuthContext;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    clamp_page, clamp_per_page, into_call_result, parse_arguments,
};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMyQiitaArticlesParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number, starting at 1 (default: 1)")]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[schemars(description = "Results per page, 1-100 (default: 20)")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

pub struct GetMyQiitaArticlesTool;

impl GetMyQiitaArticlesTool {
    pub const NAME: &'static str = "get_my_qiita_articles";

    pub const DESCRIPTION: &'static str = "List the authenticated user's Qiita articles (GET /api/v2/authenticated_user/items). \
         Requires an access token with read_qiita scope, passed as ?token= on the connection URL.";

    #[instrument(skip_all)]
    pub async fn execute(
        params: &GetMyQiitaArticlesParams,
        client: &QiitaClient,
        auth: &AuthContext,
    ) -> Result<Value, ToolError> {
        if auth.token().is_none() {
            warn!("Listing own articles without a token; Qiita will reject the request");
        }

        let page = clamp_page(params.page);
        let per_page = clamp_per_page(params.per_page);
        info!("Listing own Qiita items (page {}, per_page {})", page, per_page);

        let request = client
            .request(Method::GET, "authenticated_user/items", auth)
            .query(&[("page", page), ("per_page", per_page)]);
        let items: Value = client.read_json(request).await?;

        Ok(json!({ "results": items }))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMyQiitaArticlesParams>(),
            annotations: Some(ToolAnnotations::new().read_only(true).open_world(true)),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<QiitaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let auth = client.resolve_auth(&ctx.request_context);
            let client = client.clone();
            async move {
                let params: GetMyQiitaArticlesParams = parse_arguments(args)?;
                Ok(into_call_result(Self::execute(&params, &client, &auth).await))
            }
            .boxed()
        })
    }
}
