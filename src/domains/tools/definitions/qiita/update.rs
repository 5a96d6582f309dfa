//! Partially update an existing Qiita article.
//!
//! Only the fields the caller supplied are sent. With no field supplied the
//! tool answers `{"message": "Nothing to update."}` without calling Qiita.
//! Like posting, upstream error payloads are returned rather than raised.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::client::{QiitaClient, validate_item_id};
use super::types::ArticleTag;
use crate::core::auth::AuthContext;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{into_call_result, parse_arguments};

/// Message returned when an update carries no field.
pub const NOTHING_TO_UPDATE: &str = "Nothing to update.";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateQiitaArticleParams {
    #[schemars(description = "Qiita item id of the article to update")]
    pub item_id: String,

    #[serde(default)]
    #[schemars(description = "New title")]
    pub title: Option<String>,

    #[serde(default)]
    #[schemars(description = "New body (Markdown)")]
    pub body: Option<String>,

    #[serde(default)]
    #[schemars(description = "Replacement tag list")]
    pub tags: Option<Vec<ArticleTag>>,

    #[serde(default)]
    #[schemars(description = "Change private (limited sharing) status")]
    pub private: Option<bool>,
}

/// Body of `PATCH /api/v2/items/:item_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticlePatchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ArticleTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl ArticlePatchPayload {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.tags.is_none() && self.private.is_none()
    }
}

impl From<&UpdateQiitaArticleParams> for ArticlePatchPayload {
    fn from(params: &UpdateQiitaArticleParams) -> Self {
        Self {
            title: params.title.clone(),
            body: params.body.clone(),
            tags: params.tags.clone(),
            private: params.private,
        }
    }
}

pub struct UpdateQiitaArticleTool;

impl UpdateQiitaArticleTool {
    pub const NAME: &'static str = "update_qiita_article";

    pub const DESCRIPTION: &'static str = "Update an existing Qiita article (PATCH /api/v2/items/:item_id). \
         Only the supplied fields (title, body, tags, private) are changed. \
         Requires an access token with write_qiita scope. Returns the upstream response unchanged.";

    #[instrument(skip_all, fields(item_id = %params.item_id))]
    pub async fn execute(
        params: &UpdateQiitaArticleParams,
        client: &QiitaClient,
        auth: &AuthContext,
    ) -> Result<Value, ToolError> {
        let patch = ArticlePatchPayload::from(params);
        if patch.is_empty() {
            info!("No fields supplied, skipping update");
            return Ok(json!({ "message": NOTHING_TO_UPDATE }));
        }

        validate_item_id(&params.item_id)?;
        info!("Updating Qiita item");

        let path = format!("items/{}", params.item_id);
        client
            .write_json(client.request(Method::PATCH, &path, auth).json(&patch))
            .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateQiitaArticleParams>(),
            annotations: Some(
                ToolAnnotations::new()
                    .read_only(false)
                    .idempotent(true)
                    .open_world(true),
            ),
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
                let params: UpdateQiitaArticleParams = parse_arguments(args)?;
                Ok(into_call_result(Self::execute(&params, &client, &auth).await))
            }
            .boxed()
        })
    }
}
