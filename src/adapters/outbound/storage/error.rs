use crate::domain::errors::RemoteError;

/// Service-style error code for an `object_store` error
fn object_store_code(err: &object_store::Error) -> &'static str {
    match err {
        object_store::Error::NotFound { .. } => "NotFound",
        object_store::Error::AlreadyExists { .. } => "AlreadyExists",
        object_store::Error::Precondition { .. } => "PreconditionFailed",
        object_store::Error::NotModified { .. } => "NotModified",
        object_store::Error::PermissionDenied { .. } => "AccessDenied",
        object_store::Error::Unauthenticated { .. } => "Unauthenticated",
        object_store::Error::NotSupported { .. } => "NotSupported",
        object_store::Error::InvalidPath { .. } => "InvalidPath",
        object_store::Error::Generic { .. } => "Generic",
        _ => "Unknown",
    }
}

/// Convert object_store errors to remote client errors
impl From<object_store::Error> for RemoteError {
    fn from(err: object_store::Error) -> Self {
        let code = object_store_code(&err);
        RemoteError::new(code, err.to_string(), err)
    }
}

/// Convert rejected object paths to remote client errors
impl From<object_store::path::Error> for RemoteError {
    fn from(err: object_store::path::Error) -> Self {
        RemoteError::new("InvalidPath", err.to_string(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_code() {
        let err = object_store::Error::NotFound {
            path: "photos/abc".to_string(),
            source: "missing".into(),
        };
        let remote = RemoteError::from(err);
        assert_eq!(remote.code(), "NotFound");
        assert!(remote.message().contains("photos/abc"));
    }

    #[test]
    fn test_generic_code() {
        let err = object_store::Error::Generic {
            store: "S3",
            source: "connection reset".into(),
        };
        assert_eq!(RemoteError::from(err).code(), "Generic");
    }
}
