//! Feedback Analysis Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, metrics, and tracing.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use avis_sentiment_analyzer::{api, config, metrics::Metrics};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let metrics = Metrics::init();
    let app = api::router().merge(metrics.router());

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "feedback analysis service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
