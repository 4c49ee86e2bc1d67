use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod seed;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state — cheap to clone (catalog behind Arc, never
/// mutated after startup).
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Catalog Service  —  Rust + Axum     ║");
    info!("╚══════════════════════════════════════╝");

    let catalog = Catalog::new(seed::products())?;
    info!(
        products = catalog.products().len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("Quick-start: GET http://{}/search?query=protein", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Banners ─────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Catalog queries ─────────────────────────────────────────────────
        .route("/search", get(handlers::products::search_products))
        .route("/products/:id", get(handlers::products::get_product))
        .route("/categories", get(handlers::products::list_categories))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
