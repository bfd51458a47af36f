use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Extraction(e) => match e {
                ExtractionError::UnsupportedFormat => {
                    (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", e.to_string())
                }
                ExtractionError::InsufficientText(msg) => {
                    (StatusCode::BAD_REQUEST, "INSUFFICIENT_TEXT", msg.clone())
                }
                ExtractionError::ExtractionFailed(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTRACTION_FAILED",
                    msg.clone(),
                ),
            },
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
            AppError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UNEXPECTED_ERROR",
                format!("{e:#}"),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = self.parts();

        if status.is_server_error() {
            tracing::error!("{code}: {detail}");
        }

        // `detail` is the field existing clients read the message from.
        let body = Json(json!({
            "detail": detail,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unsupported_format_is_400() {
        let (status, body) = body_json(ExtractionError::UnsupportedFormat.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNSUPPORTED_FORMAT");
        assert_eq!(
            body["detail"],
            "Unsupported file format. Please upload PDF or DOCX."
        );
    }

    #[tokio::test]
    async fn test_insufficient_text_is_400() {
        let err = ExtractionError::InsufficientText("scanned".into());
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INSUFFICIENT_TEXT");
        assert_eq!(body["detail"], "scanned");
    }

    #[tokio::test]
    async fn test_extraction_failed_is_500_with_message() {
        let err = ExtractionError::ExtractionFailed("Failed to extract text from DOCX: bad zip".into());
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "EXTRACTION_FAILED");
        assert_eq!(body["detail"], "Failed to extract text from DOCX: bad zip");
    }

    #[tokio::test]
    async fn test_internal_error_surfaces_message() {
        let (status, body) = body_json(AppError::Internal(anyhow!("worker crashed"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "UNEXPECTED_ERROR");
        assert_eq!(body["detail"], "worker crashed");
    }

    #[tokio::test]
    async fn test_validation_is_400() {
        let (status, body) = body_json(AppError::Validation("No file provided".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "No file provided");
    }

    #[tokio::test]
    async fn test_unsupported_media_type_is_415() {
        let err = AppError::UnsupportedMediaType("missing content type".into());
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
    }
}
