use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_blob, delete_blob, get_blob, get_options, health, list_backends, put_blob,
    save_options,
};
use crate::services::StorageManager;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub manager: StorageManager,
}

impl AppState {
    pub fn new(manager: StorageManager) -> Self {
        Self { manager }
    }
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/backends", get(list_backends))
        .merge(create_storage_router())
        .merge(create_config_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create a router with just blob operations
pub fn create_storage_router() -> Router<AppState> {
    Router::new()
        .route("/storage/{backend}", post(create_blob))
        .route(
            "/storage/{backend}/{reference}",
            get(get_blob).put(put_blob).delete(delete_blob),
        )
}

/// Create a router with just settings operations
pub fn create_config_router() -> Router<AppState> {
    Router::new().route("/config/{backend}", get(get_options).post(save_options))
}
