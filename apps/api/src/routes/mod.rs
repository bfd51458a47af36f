pub mod health;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::extraction::handlers::handle_extract_cv_text;
use crate::search::handlers::handle_process_search_query;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/extract-cv-text", post(handle_extract_cv_text))
        .route("/process-search-query", post(handle_process_search_query))
        .with_state(state)
}

/// The routes plus the middleware stack the server runs with.
pub fn build_app(state: AppState, config: &Config) -> Result<Router> {
    Ok(build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config)?))
}

/// Single allowed origin with credentials. Methods and headers are mirrored
/// from the preflight because wildcards are not allowed alongside credentials.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("CORS_ORIGIN '{}' is not a valid header value", config.cors_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
