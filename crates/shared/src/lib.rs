//! SecureRand Protocol - wire types for the MCP server
//!
//! This crate contains the types exchanged with MCP clients:
//! - JSON-RPC 2.0 envelopes (requests, responses, error objects)
//! - MCP payloads for initialization, tools and prompts
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **camelCase on the wire** - MCP field names are camelCase; Rust fields are snake_case

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::{
    error_codes, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestId, JSONRPC_VERSION,
};
pub use mcp::{
    CallToolParams, CallToolResult, Content, GetPromptParams, GetPromptResult, Implementation,
    InitializeParams, InitializeResult, ListChangedCapability, ListPromptsResult,
    ListToolsResult, PromptArgument, PromptDescriptor, PromptMessage, Role, ServerCapabilities,
    ToolDescriptor, LATEST_PROTOCOL_VERSION, SUPPORTED_PROTOCOL_VERSIONS,
};
