//! Zenn tools module.
//!
//! Zenn has no write API; articles are published from a linked GitHub
//! repository. The single tool here sends a repository-dispatch event that
//! the repository's workflow turns into an article.

pub mod dispatch;
pub mod post;

pub use dispatch::{GithubDispatchClient, ZennDispatchPayload};
pub use post::{PostZennArticleParams, PostZennArticleTool};
