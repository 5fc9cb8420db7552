//! Item Routes
//!
//! `/items` handlers. Each one is a thin pass-through to the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::{Item, ItemId, ItemPatch, NewItem};
use crate::AppState;
use super::error::ApiResult;

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    let items = state.items.list().await?;
    Ok(Json(items))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Item>> {
    let item = state.items.find_by_id(&ItemId::from(id)).await?;
    Ok(Json(item))
}

/// POST /items
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<NewItem>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let item = request.into_item()?;
    let stored = state.items.create(&item).await?;

    tracing::info!(id = %stored.id, "item created");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /items/{id}
///
/// Applies the patch, then re-reads so the response reflects what is stored.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> ApiResult<Json<Item>> {
    patch.validate()?;

    let id = ItemId::from(id);
    state.items.update(&id, &patch).await?;
    let item = state.items.find_by_id(&id).await?;
    Ok(Json(item))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = ItemId::from(id);
    state.items.delete(&id).await?;

    tracing::info!(%id, "item deleted");
    Ok(StatusCode::OK)
}
