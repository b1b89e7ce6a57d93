//! Use cases - what the server can do, independent of transport.
//!
//! - `generation` - the seven random generation operations
//! - `tools` - the registry that exposes them as MCP tools
//! - `prompts` - the prompt catalogue

pub mod generation;
pub mod prompts;
pub mod tools;

pub use generation::Generator;
pub use prompts::{PromptCatalogue, PromptError};
pub use tools::{ToolDefinition, ToolError, ToolRegistry};
