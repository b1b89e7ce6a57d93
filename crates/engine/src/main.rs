//! SecureRand MCP server - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use securerand_engine::api::{self, McpHandler};
use securerand_engine::infrastructure::config::{ServerConfig, Transport};
use securerand_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the server may be launched from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging. Stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "securerand_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env()?;
    if config.show_banner {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            transport = %config.transport,
            "Starting SecureRand MCP server"
        );
    }

    let app = Arc::new(App::system());

    match config.transport {
        Transport::Stdio => {
            api::stdio::serve(McpHandler::new(app), tokio::io::stdin(), tokio::io::stdout())
                .await?;
            tracing::info!("Stdin closed, shutting down");
        }
        Transport::Http => {
            let mut router = api::http::routes()
                .with_state(app)
                .layer(TraceLayer::new_for_http());

            if let Some(cors) = config
                .cors_allowed_origins
                .as_deref()
                .and_then(api::http::cors_layer)
            {
                router = router.layer(cors);
            }

            let addr = config.bind_addr()?;
            tracing::info!("Listening on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
