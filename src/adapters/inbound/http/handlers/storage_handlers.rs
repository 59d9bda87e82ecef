use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::sync::Arc;

use crate::{
    adapters::inbound::http::{
        dto::{ApiError, ReferenceDto, internal_error, storage_error, unknown_backend},
        router::AppState,
    },
    ports::WritableStorage,
};

async fn resolve(state: &AppState, backend: &str) -> Result<Arc<dyn WritableStorage>, ApiError> {
    state
        .manager
        .storage_instance(backend)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| unknown_backend(backend))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// List registered backend names
pub async fn list_backends(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.manager.backends())
}

/// Store a blob under a freshly generated reference
pub async fn create_blob(
    State(state): State<AppState>,
    Path(backend): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<ReferenceDto>), ApiError> {
    let storage = resolve(&state, &backend).await?;
    let reference = storage.put(body, None).await.map_err(storage_error)?;

    Ok((StatusCode::CREATED, Json(ReferenceDto { reference })))
}

/// Store a blob under an explicit reference, overwriting any previous content
pub async fn put_blob(
    State(state): State<AppState>,
    Path((backend, reference)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<ReferenceDto>, ApiError> {
    let storage = resolve(&state, &backend).await?;
    let reference = storage
        .put(body, Some(&reference))
        .await
        .map_err(storage_error)?;

    Ok(Json(ReferenceDto { reference }))
}

/// Load a blob
pub async fn get_blob(
    State(state): State<AppState>,
    Path((backend, reference)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let storage = resolve(&state, &backend).await?;
    let data = storage.get(&reference).await.map_err(storage_error)?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        data,
    )
        .into_response())
}

/// Remove a blob
pub async fn delete_blob(
    State(state): State<AppState>,
    Path((backend, reference)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let storage = resolve(&state, &backend).await?;
    storage.delete(&reference).await.map_err(storage_error)?;

    Ok(StatusCode::NO_CONTENT)
}
