use anyhow::Context;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{ExtractTextResponse, UploadedDocument};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// POST /extract-cv-text
pub async fn handle_extract_cv_text(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractTextResponse>, AppError> {
    let multipart = multipart.map_err(|e| {
        upload_error("Expected a multipart/form-data upload", e.status(), e.body_text())
    })?;
    let document = read_upload(multipart).await?;
    let filename = document.filename.clone();

    // PDF parsing is CPU-bound; keep it off the async workers.
    let extractor = state.extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&document))
        .await
        .context("document extraction task failed")??;

    let length = text.char_count();
    info!("Successfully extracted {length} characters from {filename}");

    Ok(Json(ExtractTextResponse {
        success: true,
        text,
        length,
        filename,
    }))
}

/// Pulls the `file` field out of the multipart body, ignoring any others.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read uploaded file", e))?;

        return Ok(UploadedDocument { filename, bytes });
    }

    Err(AppError::Validation("No file provided".to_string()))
}

fn multipart_error(context: &str, e: MultipartError) -> AppError {
    upload_error(context, e.status(), e.body_text())
}

fn upload_error(context: &str, status: StatusCode, detail: String) -> AppError {
    let message = format!("{context}: {detail}");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}
