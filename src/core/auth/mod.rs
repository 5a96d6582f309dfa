// Auth module for connection-scoped credentials
//
// MCP clients pass their upstream credentials on the connection URL
// (`/mcp?token=...&repo_name=owner/repo`). This module turns the inbound
// HTTP request attached to each tool call into an explicit `AuthContext`
// that is handed to the tool alongside its arguments.

pub mod connection;

pub use connection::AuthContext;
