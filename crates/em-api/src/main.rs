//! Event query API — resolves free-text facility/event queries.
//!
//! Loads the event catalog once, wires the configured extraction oracle,
//! and serves `POST /extract_id` plus read-only catalog endpoints.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use em_api::config::ApiConfig;
use em_api::oracle::build_oracle;
use em_api::routes::build_router;
use em_api::state::AppState;
use em_resolver::{FileCatalogSource, load_or_empty};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "em-api starting");

    let config = ApiConfig::load()?;

    // A missing or broken catalog degrades to an empty index.
    let catalog = load_or_empty(&FileCatalogSource::new(&config.catalog_path)).await;
    let oracle = build_oracle(&config.oracle).await;

    let app = build_router(AppState::new(catalog, oracle));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
