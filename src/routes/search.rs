//! Search routes
//!
//! Looks up comma-separated drug names in the catalog and attaches a
//! generated summary to each match. An empty result set is informational,
//! not an error.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{resolve, CatalogRecord};
use crate::html;
use crate::state::AppState;

use super::MedCard;

/// Create the search router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Comma-separated drug names
    pub q: String,
}

/// Generic search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<MedCard>,
}

/// Search endpoint
///
/// GET /api/v1/search?q=Napa, Sergel
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let records = resolve(state.catalog(), query.q.split(','));
    let results = build_cards(&state, &records).await;

    Json(SearchResponse {
        query: query.q,
        count: results.len(),
        results,
    })
}

/// Server-rendered search results
///
/// GET /search?q=Napa, Sergel
pub async fn search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let records = resolve(state.catalog(), query.q.split(','));
    let cards = build_cards(&state, &records).await;

    Html(html::results(
        "Results Found",
        &cards,
        "No medicines found. Check the spelling or try another name.",
    ))
}

/// Generate a summary per matched record.
///
/// Failures are isolated per record: the card is still rendered, with no
/// summary, and the failure is logged.
pub(crate) async fn build_cards(state: &AppState, records: &[&CatalogRecord]) -> Vec<MedCard> {
    let mut cards = Vec::with_capacity(records.len());

    for record in records {
        let prompt = state.prompts().build(record);
        let summary = match state.generator().generate(&prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Summary generation failed for {}: {}", record.drug_name, e);
                None
            }
        };
        cards.push(MedCard::new(record, summary));
    }

    cards
}
