use super::BoxError;

/// A failure reported by the remote object-storage client
#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct RemoteError {
    code: String,
    message: String,
    #[source]
    source: BoxError,
}

impl RemoteError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            source: source.into(),
        }
    }

    /// Service error code, e.g. `NotFound` or `AccessDenied`
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for remote client calls
pub type RemoteResult<T> = Result<T, RemoteError>;
