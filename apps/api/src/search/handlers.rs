use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::search::{SearchQueryRequest, SearchQueryResponse};
use crate::state::AppState;

/// POST /process-search-query
pub async fn handle_process_search_query(
    State(state): State<AppState>,
    payload: Result<Json<SearchQueryRequest>, JsonRejection>,
) -> Result<Json<SearchQueryResponse>, AppError> {
    let Json(req) = payload.map_err(json_error)?;

    let enhanced_query = state.enhancer.enhance(&req.query);
    Ok(Json(SearchQueryResponse {
        success: true,
        enhanced_query,
    }))
}

/// Transport problems keep their status; a body that is not a valid
/// request object is a 422.
fn json_error(e: JsonRejection) -> AppError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(e.body_text()),
        _ => AppError::UnprocessableEntity(e.body_text()),
    }
}
