//! gamesite crate entrypoint.
//!
//! Initializes logging, starts the Tokio runtime, and launches the web
//! server defined in the `server` module.

use gamesite::server;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    server::run().await
}
