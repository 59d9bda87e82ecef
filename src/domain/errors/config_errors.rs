use super::BoxError;

/// Errors raised by the host configuration store
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config value {namespace}.{key}")]
    Read {
        namespace: String,
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write config value {namespace}.{key}")]
    Write {
        namespace: String,
        key: String,
        #[source]
        source: BoxError,
    },
}

impl ConfigError {
    pub fn read(namespace: &str, key: &str, source: impl Into<BoxError>) -> Self {
        ConfigError::Read {
            namespace: namespace.to_string(),
            key: key.to_string(),
            source: source.into(),
        }
    }

    pub fn write(namespace: &str, key: &str, source: impl Into<BoxError>) -> Self {
        ConfigError::Write {
            namespace: namespace.to_string(),
            key: key.to_string(),
            source: source.into(),
        }
    }
}

/// Result type for config store operations
pub type ConfigResult<T> = Result<T, ConfigError>;
