//! Error types for the Medi-Bot server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::LoadError;
use crate::imaging::ImageError;
use crate::ocr::OcrError;
use crate::summary::GenerationError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] LoadError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Upload error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "catalog_error",
                    "Catalog is unavailable".to_string(),
                )
            }
            AppError::Image(e) => (StatusCode::BAD_REQUEST, "image_error", e.to_string()),
            AppError::Ocr(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    tracing::error!("OCR error: {}", e);
                }
                (status, "ocr_error", e.to_string())
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "generation_error",
                    "Summary generation failed".to_string(),
                )
            }
            AppError::Multipart(e) => (StatusCode::BAD_REQUEST, "bad_request", e.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_errors_are_bad_requests() {
        let response =
            AppError::Image(ImageError::Decode("not an image".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_ocr_backend_maps_to_503() {
        let response =
            AppError::Ocr(OcrError::BackendNotAvailable("tesseract".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
