//! Application state and composition.

use std::sync::Arc;

use securerand_shared::Implementation;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{ClockPort, RandomPort},
};
use crate::use_cases::{Generator, PromptCatalogue, ToolRegistry};

pub const SERVER_NAME: &str = "securerand-mcp";

/// Main application state.
///
/// Built once at startup and shared read-only by every request handler.
pub struct App {
    pub generator: Generator,
    pub tools: ToolRegistry,
    pub prompts: PromptCatalogue,
    pub server_info: Implementation,
}

impl App {
    /// Wire the application around the given randomness and clock ports.
    pub fn new(random: Arc<dyn RandomPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            generator: Generator::new(random, clock),
            tools: ToolRegistry::standard(),
            prompts: PromptCatalogue::new(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Secure Random Number Generator".to_string()),
            },
        }
    }

    /// Production wiring: OS CSPRNG and the system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemRandom::new()), Arc::new(SystemClock::new()))
    }
}
