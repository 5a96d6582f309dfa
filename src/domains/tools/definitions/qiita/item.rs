//! Fetch a single Qiita article by id.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::client::{QiitaClient, validate_item_id};
use crate::core::auth::AuthContext;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{into_call_result, parse_arguments};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetQiitaItemParams {
    #[schemars(description = "Qiita item id, e.g. c686397e4a0f4f11683d")]
    pub item_id: String,
}

pub struct GetQiitaItemTool;

impl GetQiitaItemTool {
    pub const NAME: &'static str = "get_qiita_item";

    pub const DESCRIPTION: &'static str = "Fetch one Qiita article by id (GET /api/v2/items/:item_id). \
         Returns the full upstream item: title, markdown body, rendered HTML body, tags, url, author and counters.";

    /// The item is returned as the upstream sent it.
    #[instrument(skip_all, fields(item_id = %params.item_id))]
    pub async fn execute(
        params: &GetQiitaItemParams,
        client: &QiitaClient,
        auth: &AuthContext,
    ) -> Result<Value, ToolError> {
        validate_item_id(&params.item_id)?;
        info!("Fetching Qiita item");

        let path = format!("items/{}", params.item_id);
        client
            .read_json(client.request(Method::GET, &path, auth))
            .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetQiitaItemParams>(),
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
                let params: GetQiitaItemParams = parse_arguments(args)?;
                Ok(into_call_result(Self::execute(&params, &client, &auth).await))
            }
            .boxed()
        })
    }
}
