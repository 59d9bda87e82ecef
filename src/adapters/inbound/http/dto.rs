use axum::{Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::errors::{ConfigError, StorageError};

/// DTO for the reference a blob was stored under
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceDto {
    pub reference: String,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponseDto>);

impl ErrorResponseDto {
    pub fn from_storage_error(error: &StorageError) -> Self {
        let mut details = HashMap::new();

        match error {
            StorageError::Reference { reference, .. } => {
                details.insert(
                    "reference".to_string(),
                    serde_json::Value::String(reference.clone()),
                );
            }
            StorageError::Backend {
                reference, code, ..
            } => {
                if let Some(reference) = reference {
                    details.insert(
                        "reference".to_string(),
                        serde_json::Value::String(reference.clone()),
                    );
                }
                if let Some(code) = code {
                    details.insert(
                        "code".to_string(),
                        serde_json::Value::String(code.clone()),
                    );
                }
            }
        }

        let error_kind = if error.is_reference() {
            "ReferenceError"
        } else {
            "BackendError"
        };

        ErrorResponseDto {
            error: error_kind.to_string(),
            message: error.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(details)
            },
            timestamp: Utc::now(),
        }
    }

    pub fn from_config_error(error: &ConfigError) -> Self {
        ErrorResponseDto {
            error: "ConfigError".to_string(),
            message: error.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        ErrorResponseDto {
            error: "NotFound".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        ErrorResponseDto {
            error: "InternalServerError".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

/// Convert domain StorageError to HTTP status codes for API responses
impl From<&StorageError> for StatusCode {
    fn from(err: &StorageError) -> Self {
        match err {
            StorageError::Reference { .. } => StatusCode::NOT_FOUND,
            StorageError::Backend { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

pub fn storage_error(err: StorageError) -> ApiError {
    (
        StatusCode::from(&err),
        Json(ErrorResponseDto::from_storage_error(&err)),
    )
}

pub fn config_error(err: ConfigError) -> ApiError {
    tracing::error!(error = %err, "Config store failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseDto::from_config_error(&err)),
    )
}

pub fn unknown_backend(name: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponseDto::not_found(&format!(
            "Unknown storage backend: {}",
            name
        ))),
    )
}

pub fn internal_error(err: anyhow::Error) -> ApiError {
    tracing::error!(error = %format!("{:#}", err), "Failed to build storage backend");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseDto::internal_error(&format!("{:#}", err))),
    )
}
