//! Route modules for Medi-Bot Server

pub mod health;
pub mod pages;
pub mod prescriptions;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::state::AppState;

/// One rendered result: a matched medicine plus its generated summary.
///
/// The summary is optional so one failed generation cannot block the other
/// cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedCard {
    pub drug_name: String,
    pub company_name: String,
    pub summary: Option<String>,
    pub indication: String,
    pub active_ingredient: String,
    pub pregnancy_safety: String,
    pub side_effects: String,
}

impl MedCard {
    pub fn new(record: &CatalogRecord, summary: Option<String>) -> Self {
        Self {
            drug_name: record.drug_name.clone(),
            company_name: record.company_name.clone(),
            summary,
            indication: record.indication.clone(),
            active_ingredient: record.active_ingredient.clone(),
            pregnancy_safety: record.pregnancy_safety.clone(),
            side_effects: record.side_effects.clone(),
        }
    }
}

/// Build the application router (without middleware layers).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(pages::home))
        .route("/search", get(search::search_page))
        .route("/prescriptions", post(prescriptions::upload_page))
        .route("/pages/:category", get(pages::category_page))
        .nest("/api/v1/search", search::router())
        .nest("/api/v1/prescriptions", prescriptions::router())
        .nest("/api/v1/pages", pages::api_router())
        .with_state(state)
}
