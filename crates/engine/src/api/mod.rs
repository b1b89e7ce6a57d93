//! API layer - MCP dispatch and its transports.

pub mod http;
pub mod mcp;
pub mod stdio;

pub use mcp::McpHandler;
