//! Aliment collection and item handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::debug;

use aliment_core::error::AppError;

use crate::dto::request::AlimentPayload;
use crate::dto::response::AlimentResponse;
use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// GET /items
pub async fn list_aliments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AlimentResponse>>> {
    debug!("Getting all aliments");
    let aliments = state.repo.get_all().await?;
    Ok(Json(aliments.into_iter().map(AlimentResponse::from).collect()))
}

/// PUT /items
pub async fn create_aliment(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AlimentPayload>,
) -> ApiResult<Json<AlimentResponse>> {
    debug!(?payload, "Creating new aliment");
    let aliment = payload.into_aliment()?;
    let id = state.repo.insert(&aliment).await?;
    Ok(Json(AlimentResponse::from(aliment.with_id(id))))
}

/// GET /items/{id}
pub async fn get_aliment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<AlimentResponse>> {
    debug!(id, "Getting aliment");
    match state.repo.get_by_id(id).await? {
        Some(aliment) => Ok(Json(aliment.into())),
        None => Err(AppError::not_found(format!("Aliment {id} not found")).into()),
    }
}

/// PUT /items/{id}
pub async fn update_aliment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<AlimentPayload>,
) -> ApiResult<Json<AlimentResponse>> {
    debug!(id, "Updating aliment");
    let aliment = payload.into_aliment()?;
    if !state.repo.exists(id).await? {
        return Err(AppError::not_found(format!("Aliment {id} not found")).into());
    }
    // The path id wins over anything the body claimed.
    let aliment = aliment.with_id(id);
    state.repo.update(&aliment).await?;
    Ok(Json(aliment.into()))
}

/// DELETE /items/{id}
pub async fn delete_aliment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    debug!(id, "Deleting aliment");
    if !state.repo.exists(id).await? {
        return Err(AppError::not_found(format!("Aliment {id} not found")).into());
    }
    state.repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
