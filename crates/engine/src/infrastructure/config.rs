//! Server configuration from environment variables and command-line flags.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MCP_TRANSPORT must be 'stdio' or 'http', got '{0}'")]
    InvalidTransport(String),

    #[error("Invalid port '{0}'")]
    InvalidPort(String),

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// How the server talks to its client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout
    #[default]
    Stdio,
    /// JSON-RPC over `POST /mcp`
    Http,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::InvalidTransport(s.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    /// Log the startup line. Off with `MCP_NO_BANNER=1` or `--no-banner`.
    pub show_banner: bool,
    /// `*` or a comma-separated origin list for the HTTP transport
    pub cors_allowed_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            show_banner: true,
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment and arguments.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Build configuration from an arbitrary variable lookup and argument list.
    pub fn from_sources<I>(lookup: impl Fn(&str) -> Option<String>, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        if let Some(transport) = lookup("MCP_TRANSPORT").filter(|v| !v.trim().is_empty()) {
            config.transport = transport.parse()?;
        }
        if let Some(host) = lookup("SERVER_HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if lookup("MCP_NO_BANNER").is_some_and(|v| v.trim() == "1") {
            config.show_banner = false;
        }
        config.cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if args.into_iter().any(|arg| arg == "--no-banner") {
            config.show_banner = false;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr.clone()))
    }
}
