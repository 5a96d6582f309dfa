//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain, `tools`, grouping the Qiita and Zenn
//! publishing tools.

pub mod tools;
