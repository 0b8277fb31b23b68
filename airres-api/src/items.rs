use airres_core::{ItemBody, ItemDto};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ItemCreated {
    id: i32,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(find_all_items).post(register_item))
        .route("/api/items/{id}", get(find_item_by_id))
}

async fn find_all_items(State(state): State<AppState>) -> Result<Json<Vec<ItemDto>>, AppError> {
    Ok(Json(state.items.find_all_items().await?))
}

async fn find_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemDto>, AppError> {
    Ok(Json(state.items.find_item_by_id(id).await?))
}

async fn register_item(
    State(state): State<AppState>,
    Json(body): Json<ItemBody>,
) -> Result<(StatusCode, Json<ItemCreated>), AppError> {
    let id = state.items.register_item(&body).await?;
    Ok((StatusCode::CREATED, Json(ItemCreated { id })))
}
