use object_store::{ObjectStore as ApacheObjectStore, local::LocalFileSystem, memory::InMemory};
use std::{path::PathBuf, sync::Arc};

use crate::{
    adapters::outbound::{
        config::{InMemoryConfigStore, SqlConfigStore},
        l10n::{CatalogTranslator, IdentityTranslator},
        storage::{AwsS3Client, ObjectStoreClient},
    },
    ports::{ConfigStore, RemoteObjectClient, Translator},
    services::{ObjectStorageFactory, RemoteClientSource, StorageManager},
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config_backend: ConfigBackend,
    pub remote_backend: RemoteBackend,
    /// JSON catalog of `template -> translation` for labels and messages
    pub l10n_catalog: Option<PathBuf>,
}

/// Where backend settings are persisted
#[derive(Debug, Clone, Default)]
pub enum ConfigBackend {
    #[default]
    InMemory,
    Database {
        connection_string: String,
    },
}

/// Which remote service blobs are written to
#[derive(Debug, Clone, Default)]
pub enum RemoteBackend {
    /// AWS S3 or an S3-compatible service, configured from the stored settings
    S3,
    #[default]
    InMemory,
    /// Local directory, for development without an S3 service
    LocalFileSystem { root: PathBuf },
}

impl AppConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let config_backend = match std::env::var("CONFIG_BACKEND").as_deref() {
            Ok("database") => {
                let connection_string =
                    std::env::var("DATABASE_URL").map_err(|_| AppError::Configuration {
                        message: "DATABASE_URL environment variable required".to_string(),
                    })?;
                ConfigBackend::Database { connection_string }
            }
            _ => ConfigBackend::InMemory,
        };

        let remote_backend = match std::env::var("REMOTE_BACKEND").as_deref() {
            Ok("s3") => RemoteBackend::S3,
            Ok("local") => {
                let root = std::env::var("LOCAL_ROOT").map_err(|_| AppError::Configuration {
                    message: "LOCAL_ROOT environment variable required".to_string(),
                })?;
                RemoteBackend::LocalFileSystem { root: root.into() }
            }
            _ => RemoteBackend::InMemory,
        };

        Ok(Self {
            config_backend,
            remote_backend,
            l10n_catalog: std::env::var("L10N_CATALOG").ok().map(PathBuf::from),
        })
    }
}

/// Application services container
#[derive(Clone)]
pub struct AppServices {
    pub manager: StorageManager,
    pub config_store: Arc<dyn ConfigStore>,
    pub translator: Arc<dyn Translator>,
}

/// Application builder for dependency injection
#[derive(Default)]
pub struct AppBuilder {
    config: AppConfig,
    config_store: Option<Arc<dyn ConfigStore>>,
    remote_client: Option<Arc<dyn RemoteObjectClient>>,
    translator: Option<Arc<dyn Translator>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_backend(mut self, backend: ConfigBackend) -> Self {
        self.config.config_backend = backend;
        self
    }

    pub fn with_remote_backend(mut self, backend: RemoteBackend) -> Self {
        self.config.remote_backend = backend;
        self
    }

    /// Use an existing config store instead of building one
    pub fn with_config_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.config_store = Some(store);
        self
    }

    /// Use an existing remote client instead of building one
    pub fn with_remote_client(mut self, client: Arc<dyn RemoteObjectClient>) -> Self {
        self.remote_client = Some(client);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let config_store = match self.config_store.clone() {
            Some(store) => store,
            None => self.create_config_store().await?,
        };
        let translator = match self.translator.clone() {
            Some(translator) => translator,
            None => self.create_translator().await?,
        };
        let client = match self.remote_client.clone() {
            Some(client) => RemoteClientSource::Shared(client),
            None => self.create_remote_client().await?,
        };

        let manager = StorageManager::builder()
            .register(ObjectStorageFactory::new(
                config_store.clone(),
                translator.clone(),
                client,
            ))
            .build();

        Ok(AppServices {
            manager,
            config_store,
            translator,
        })
    }

    /// Create the config store based on configuration
    async fn create_config_store(&self) -> Result<Arc<dyn ConfigStore>, AppError> {
        match &self.config.config_backend {
            ConfigBackend::InMemory => Ok(Arc::new(InMemoryConfigStore::new())),
            ConfigBackend::Database { connection_string } => {
                let store = SqlConfigStore::connect(connection_string)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to connect to config database: {}", e),
                    })?;
                store.migrate().await.map_err(|e| AppError::RepositoryInit {
                    message: format!("Failed to migrate config database: {}", e),
                })?;
                Ok(Arc::new(store))
            }
        }
    }

    /// Create the remote client source based on configuration
    async fn create_remote_client(&self) -> Result<RemoteClientSource, AppError> {
        let store: Arc<dyn ApacheObjectStore> = match &self.config.remote_backend {
            RemoteBackend::S3 => {
                let shared = AwsS3Client::load_shared_config().await;
                return Ok(RemoteClientSource::S3(shared));
            }
            RemoteBackend::InMemory => Arc::new(InMemory::new()),
            RemoteBackend::LocalFileSystem { root } => {
                tokio::fs::create_dir_all(root)
                    .await
                    .map_err(|e| AppError::StorageInit {
                        message: format!("Failed to create {}: {}", root.display(), e),
                    })?;
                let store =
                    LocalFileSystem::new_with_prefix(root).map_err(|e| AppError::StorageInit {
                        message: format!("Failed to open {}: {}", root.display(), e),
                    })?;
                Arc::new(store)
            }
        };

        Ok(RemoteClientSource::Shared(Arc::new(ObjectStoreClient::new(
            store,
        ))))
    }

    async fn create_translator(&self) -> Result<Arc<dyn Translator>, AppError> {
        let Some(path) = &self.config.l10n_catalog else {
            return Ok(Arc::new(IdentityTranslator));
        };

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Configuration {
                message: format!("Failed to read catalog {}: {}", path.display(), e),
            })?;
        let catalog = CatalogTranslator::from_json(&json).map_err(|e| AppError::Configuration {
            message: format!("Invalid catalog {}: {}", path.display(), e),
        })?;
        Ok(Arc::new(catalog))
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_config_backend(ConfigBackend::InMemory)
        .with_remote_backend(RemoteBackend::InMemory)
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_config(AppConfig::from_env()?)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_create_in_memory_app() {
        let app = create_in_memory_app().await.unwrap();
        assert_eq!(app.manager.backends(), ["ObjectStorage"]);
    }

    #[tokio::test]
    async fn test_local_filesystem_backend() {
        let dir = tempfile::tempdir().unwrap();
        let app = AppBuilder::new()
            .with_remote_backend(RemoteBackend::LocalFileSystem {
                root: dir.path().join("blobs"),
            })
            .build()
            .await
            .unwrap();

        let storage = app
            .manager
            .storage_instance("ObjectStorage")
            .await
            .unwrap()
            .unwrap();
        storage.put(Bytes::from("x"), Some("k1")).await.unwrap();

        assert!(dir.path().join("blobs").join("k1").exists());
    }

    #[tokio::test]
    async fn test_translator_from_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.json");
        std::fs::write(&path, r#"{"The S3 bucket": "Der S3-Bucket"}"#).unwrap();

        let app = AppBuilder::new()
            .with_config(AppConfig {
                l10n_catalog: Some(path),
                ..Default::default()
            })
            .build()
            .await
            .unwrap();

        assert_eq!(app.translator.translate("The S3 bucket"), "Der S3-Bucket");
    }
}
