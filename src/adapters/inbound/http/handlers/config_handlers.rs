use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::collections::HashMap;

use crate::{
    adapters::inbound::http::{
        dto::{ApiError, config_error, internal_error, unknown_backend},
        router::AppState,
    },
    domain::models::{OptionErrors, StorageOptions},
    ports::ConfigurableStorage,
};

async fn resolve(state: &AppState, backend: &str) -> Result<Box<dyn ConfigurableStorage>, ApiError> {
    state
        .manager
        .storage_config(backend)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| unknown_backend(backend))
}

/// Current settings schema for a backend
pub async fn get_options(
    State(state): State<AppState>,
    Path(backend): Path<String>,
) -> Result<Json<StorageOptions>, ApiError> {
    let config = resolve(&state, &backend).await?;
    Ok(Json(config.get_options()))
}

/// Validate and persist submitted settings
///
/// Validation failures come back as 422 with a field-keyed body so a form can
/// attach each message to its input.
pub async fn save_options(
    State(state): State<AppState>,
    Path(backend): Path<String>,
    Json(submission): Json<HashMap<String, String>>,
) -> Result<(StatusCode, Json<OptionErrors>), ApiError> {
    let mut config = resolve(&state, &backend).await?;
    let errors = config
        .save_options(&submission)
        .await
        .map_err(config_error)?;

    let status = if errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(errors)))
}
