pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

// Root and health are static banners: they must answer without touching the
// catalog, so neither takes application state.

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": "Catalog Search API", "status": "running" })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "message": "API is running" })),
    )
}
