//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools map one MCP call onto one Qiita or GitHub (Zenn) API request.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder, owns the shared upstream clients
//! - `registry.rs` - Static tool metadata
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/qiita/` or `definitions/zenn/`
//! 2. Define params, execute(), to_tool() and create_route()
//! 3. Export in the platform's `mod.rs` and `definitions/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`
//! 5. List it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
