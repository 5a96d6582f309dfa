//! Qiita tools module.
//!
//! This module provides tools backed by the Qiita API v2:
//! - `search`: search public articles
//! - `item`: fetch one article
//! - `my_articles`: list the authenticated user's articles
//! - `post`: create an article
//! - `update`: partially update an article
//! - `markdown_rules`: static reference links
//!
//! All network tools share one [`QiitaClient`].

pub mod client;
pub mod item;
pub mod markdown_rules;
pub mod my_articles;
pub mod post;
pub mod search;
pub mod types;
pub mod update;

pub use client::QiitaClient;
pub use item::{GetQiitaItemParams, GetQiitaItemTool};
pub use markdown_rules::GetQiitaMarkdownRulesTool;
pub use my_articles::{GetMyQiitaArticlesParams, GetMyQiitaArticlesTool};
pub use post::{PostQiitaArticleParams, PostQiitaArticleTool};
pub use search::{SearchQiitaItemsParams, SearchQiitaItemsTool};
pub use types::{ArticleSummary, ArticleTag};
pub use update::{UpdateQiitaArticleParams, UpdateQiitaArticleTool};
