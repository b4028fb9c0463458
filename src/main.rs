use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod store;

use crate::config::Config;
use crate::store::{DocumentStore, FileStore};

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; deployments inject the variables directly
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inventory_store=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = FileStore::open(&config.data_dir).await?;
    info!(data_dir = %store.dir().display(), "Document store ready");

    let app = build_router(AppState {
        store: Arc::new(store),
    });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))

        // ── Inventory documents ─────────────────────────────────────────────
        .route("/get-data", get(handlers::inventory::get_data))
        .route("/get-total", get(handlers::inventory::get_total))
        .route("/save-data", post(handlers::inventory::save_data))
        .route("/clear-data", post(handlers::inventory::clear_data))

        // ── Pallets ─────────────────────────────────────────────────────────
        .route("/get-pallets", get(handlers::pallets::get_pallets))
        .route("/update-pallets", post(handlers::pallets::update_pallets))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
