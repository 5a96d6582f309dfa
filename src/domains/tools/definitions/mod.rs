//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod qiita;
pub mod zenn;

pub use qiita::{
    GetMyQiitaArticlesTool, GetQiitaItemTool, GetQiitaMarkdownRulesTool, PostQiitaArticleTool,
    QiitaClient, SearchQiitaItemsTool, UpdateQiitaArticleTool,
};
pub use zenn::{GithubDispatchClient, PostZennArticleTool};
