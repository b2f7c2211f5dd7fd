//! Prescription upload routes
//!
//! Accepts a multipart upload (an `image` part, JPEG or PNG, and an optional
//! `crop` part with a pixel rectangle as JSON), runs OCR, and matches the
//! recognized words against the catalog. OCR words below the confidence
//! threshold are discarded before matching.

use axum::{
    extract::{Multipart, State},
    response::Html,
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::catalog::resolve_recognized;
use crate::error::{AppError, Result};
use crate::html;
use crate::imaging::{self, CropRect};
use crate::ocr::OcrBackend;
use crate::state::AppState;

use super::search::build_cards;
use super::MedCard;

/// Create the prescriptions router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload))
}

/// Prescription lookup response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionResponse {
    /// OCR backend that read the image
    pub backend: OcrBackend,
    /// Total words the backend returned, before confidence filtering
    pub words_recognized: usize,
    pub count: usize,
    pub results: Vec<MedCard>,
}

/// Prescription upload endpoint
///
/// POST /api/v1/prescriptions (multipart: image, crop?, backend?)
async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PrescriptionResponse>> {
    Ok(Json(process(&state, multipart).await?))
}

/// Server-rendered prescription results
///
/// POST /prescriptions (the home page upload form)
pub async fn upload_page(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>> {
    let response = process(&state, multipart).await?;

    Ok(Html(html::results(
        "Results Found",
        &response.results,
        "No medicines detected. Try cropping more tightly or search manually.",
    )))
}

async fn process(state: &AppState, mut multipart: Multipart) -> Result<PrescriptionResponse> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut crop_rect: Option<CropRect> = None;
    let mut backend: Option<OcrBackend> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("image") => {
                image_data = Some(field.bytes().await?.to_vec());
            }
            Some("crop") => {
                let raw = field.text().await?;
                crop_rect = Some(
                    serde_json::from_str(&raw)
                        .map_err(|e| AppError::BadRequest(format!("Invalid crop rect: {}", e)))?,
                );
            }
            Some("backend") => {
                let raw = field.text().await?;
                backend = Some(match raw.trim() {
                    "tesseract" => OcrBackend::Tesseract,
                    "ollama" => OcrBackend::Ollama,
                    other => {
                        return Err(AppError::BadRequest(format!(
                            "Unknown OCR backend: {}",
                            other
                        )))
                    }
                });
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| AppError::BadRequest("Missing image field".to_string()))?;

    let mut image = imaging::decode(&image_data)?;
    if let Some(rect) = &crop_rect {
        image = imaging::crop(&image, rect)?;
    }
    let png = imaging::to_png_bytes(&image)?;

    let outcome = state.ocr().recognize(&png, backend).await?;
    tracing::debug!(
        "OCR via {:?} recognized {} words",
        outcome.backend,
        outcome.tokens.len()
    );

    let records = resolve_recognized(state.catalog(), &outcome.tokens);
    let results = build_cards(state, &records).await;

    Ok(PrescriptionResponse {
        backend: outcome.backend,
        words_recognized: outcome.tokens.len(),
        count: results.len(),
        results,
    })
}
