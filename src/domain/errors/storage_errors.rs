use super::{BoxError, RemoteError};

/// The storage operation that was in progress when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    Load,
    Store,
    Delete,
    GenerateReference,
}

impl StorageOperation {
    /// Verb used when the failure is about the file rather than the data
    pub fn verb(&self) -> &'static str {
        match self {
            StorageOperation::Load => "get",
            StorageOperation::Store => "store",
            StorageOperation::Delete => "delete",
            StorageOperation::GenerateReference => "generate",
        }
    }
}

impl std::fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageOperation::Load => write!(f, "load the data"),
            StorageOperation::Store => write!(f, "store the data"),
            StorageOperation::Delete => write!(f, "delete the data"),
            StorageOperation::GenerateReference => write!(f, "generate a random reference"),
        }
    }
}

/// Errors surfaced by a storage backend to its caller
///
/// `Reference` means the caller asked for something that is not there and can decide
/// for itself whether that matters. `Backend` is an operational failure of the remote
/// service and should be logged and propagated.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{backend} storage failed to {} the file {reference}, the file is invalid", .operation.verb())]
    Reference {
        backend: &'static str,
        operation: StorageOperation,
        reference: String,
        #[source]
        source: BoxError,
    },

    #[error("{backend} storage failed to {operation}{}", code_suffix(.code))]
    Backend {
        backend: &'static str,
        operation: StorageOperation,
        reference: Option<String>,
        code: Option<String>,
        #[source]
        source: BoxError,
    },
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_ref()
        .map(|code| format!(" ({})", code))
        .unwrap_or_default()
}

impl StorageError {
    /// Unknown or invalid reference
    pub fn reference(
        backend: &'static str,
        operation: StorageOperation,
        reference: impl Into<String>,
        source: RemoteError,
    ) -> Self {
        StorageError::Reference {
            backend,
            operation,
            reference: reference.into(),
            source: Box::new(source),
        }
    }

    /// Remote failure wrapped with the operation context
    pub fn remote(
        backend: &'static str,
        operation: StorageOperation,
        reference: impl Into<String>,
        source: RemoteError,
    ) -> Self {
        StorageError::Backend {
            backend,
            operation,
            reference: Some(reference.into()),
            code: Some(source.code().to_string()),
            source: Box::new(source),
        }
    }

    /// Failure that never reached the remote service
    pub fn local(backend: &'static str, operation: StorageOperation, source: BoxError) -> Self {
        StorageError::Backend {
            backend,
            operation,
            reference: None,
            code: None,
            source,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, StorageError::Reference { .. })
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, StorageError::Backend { .. })
    }

    pub fn operation(&self) -> StorageOperation {
        match self {
            StorageError::Reference { operation, .. } | StorageError::Backend { operation, .. } => {
                *operation
            }
        }
    }

    /// Remote error code, when the failure came from the remote service
    pub fn code(&self) -> Option<&str> {
        match self {
            StorageError::Backend { code, .. } => code.as_deref(),
            StorageError::Reference { .. } => None,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
