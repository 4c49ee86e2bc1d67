use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{catalog::SearchOutcome, models::SearchParams, AppState};

// ── Search ────────────────────────────────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<serde_json::Value>) {
    let start = Instant::now();

    match state.catalog.search(params.query.as_deref()) {
        SearchOutcome::MissingQuery => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "success": false,
                "message": "Query parameter is required",
                "products": [],
            })),
        ),
        SearchOutcome::Hits(hits) => {
            let query = params.query.as_deref().unwrap_or_default();

            info!(
                query = %query,
                total = hits.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "Searched catalog"
            );

            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "query": query,
                    "total": hits.len(),
                    "products": hits,
                })),
            )
        }
    }
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.catalog.get(id) {
        Some(product) => {
            info!(id, name = %product.name, "Fetched product");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "success": true, "product": product })),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "success": false, "message": "Product not found" })),
        ),
    }
}

// ── Categories ────────────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let categories = state.catalog.categories();

    info!(count = categories.len(), "Listed categories");

    (
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "categories": categories })),
    )
}
