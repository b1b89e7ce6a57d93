//! SecureRand Engine library.
//!
//! An MCP server that hands out cryptographically secure random values.
//!
//! ## Structure
//!
//! - `use_cases/` - generation operations, the tool registry and prompts
//! - `infrastructure/` - randomness and clock ports, their adapters, configuration
//! - `api/` - MCP dispatch and the stdio and HTTP transports
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
