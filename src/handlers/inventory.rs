use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::AppResult,
    models::{Document, InventorySnapshot, SaveData},
    AppState,
};

// ── GET /get-data ─────────────────────────────────────────────────────────────

pub async fn get_data(State(state): State<AppState>) -> Json<InventorySnapshot> {
    Json(InventorySnapshot {
        polly_data: state.store.load(Document::Polly).await,
        polikarpova_data: state.store.load(Document::Polikarpova).await,
        total_data: state.store.load(Document::Total).await,
    })
}

// ── GET /get-total ────────────────────────────────────────────────────────────

pub async fn get_total(State(state): State<AppState>) -> Json<Value> {
    Json(state.store.load(Document::Total).await)
}

// ── POST /save-data ───────────────────────────────────────────────────────────

/// Overwrites each inventory document present in the body. The writes are
/// independent: a failure part-way leaves earlier documents already replaced.
pub async fn save_data(
    State(state): State<AppState>,
    payload: Result<Json<SaveData>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let updates = payload.into_updates();

    for (document, value) in &updates {
        state.store.save(*document, value).await?;
    }

    let saved: Vec<&str> = updates.iter().map(|(doc, _)| doc.name()).collect();
    info!(documents = ?saved, "Saved inventory data");

    Ok((
        StatusCode::OK,
        Json(json!({ "status": "success", "message": "Data saved." })),
    ))
}

// ── POST /clear-data ──────────────────────────────────────────────────────────

pub async fn clear_data(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Value>)> {
    state.store.clear_all().await?;

    info!("Cleared inventory data");

    Ok((
        StatusCode::OK,
        Json(json!({ "status": "success", "message": "All data cleared." })),
    ))
}
