//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, and the
//! environment-driven server configuration.

pub mod clock;
pub mod config;
pub mod ports;
