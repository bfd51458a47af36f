mod config;
mod errors;
mod extraction;
mod routes;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::pdf::PdfExtractor;
use crate::extraction::DocumentExtractor;
use crate::routes::build_app;
use crate::search::enhancer::QueryEnhancer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV service v{}", env!("CARGO_PKG_VERSION"));

    let extractor = DocumentExtractor::new(PdfExtractor::default());
    info!("PDF extraction strategies: {:?}", extractor.pdf_strategies());

    let enhancer = QueryEnhancer::new().context("failed to compile search vocabularies")?;
    info!("Search vocabularies compiled");

    let state = AppState {
        extractor: Arc::new(extractor),
        enhancer: Arc::new(enhancer),
    };

    let app = build_app(state, &config)?;

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.bind_address()))?;
    info!("Listening on {addr} (CORS origin: {})", config.cors_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
