//! Home page and static category pages

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::html;
use crate::pages::{Category, Product};
use crate::state::AppState;

/// Create the JSON category router
pub fn api_router() -> Router<AppState> {
    Router::new().route("/:category", get(category_api))
}

/// Home page
///
/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(html::home(state.catalog().len(), state.catalog_error()))
}

/// Server-rendered category page
///
/// GET /pages/:category
pub async fn category_page(Path(slug): Path<String>) -> Result<Html<String>> {
    let category = Category::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown category: {}", slug)))?;
    Ok(Html(html::category(category)))
}

/// Category catalog response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category: Category,
    pub title: &'static str,
    pub tagline: &'static str,
    pub products: &'static [Product],
}

/// Category catalog as JSON
///
/// GET /api/v1/pages/:category
async fn category_api(Path(slug): Path<String>) -> Result<Json<CategoryResponse>> {
    let category = Category::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown category: {}", slug)))?;

    Ok(Json(CategoryResponse {
        category,
        title: category.title(),
        tagline: category.tagline(),
        products: category.products(),
    }))
}
