use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{Document, UpdatePallets},
    AppState,
};

pub async fn get_pallets(State(state): State<AppState>) -> Json<Value> {
    Json(state.store.load(Document::Pallets).await)
}

pub async fn update_pallets(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePallets>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let pallets = payload.validate().ok_or_else(|| {
        AppError::BadRequest("occupiedPallets must be a number.".to_string())
    })?;

    let value = json!(pallets);
    state.store.save(Document::Pallets, &value).await?;

    info!(occupied_pallets = %pallets.occupied_pallets, "Updated pallets");

    Ok((
        StatusCode::OK,
        Json(json!({ "status": "success", "message": "Pallet data updated." })),
    ))
}
