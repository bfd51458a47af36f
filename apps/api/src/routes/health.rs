use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Constant liveness response; no dependency checks.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
