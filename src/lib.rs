pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - values, settings and errors
pub use domain::{
    ConfigError, ObjectAcl, OptionErrors, OptionField, OptionKind, Reference, RemoteError,
    StorageError, StorageOperation, StorageOptions, StorageResult, StoreField, StoreSettings,
    StoredObjectKey,
};

// Port types - interfaces to the host and the remote service
pub use ports::{
    ConfigStore, ConfigurableStorage, ObjectRequest, ReferenceGenerator, RemoteObjectClient,
    Translator, WritableStorage,
};

// Services - settings panel and backend registry
pub use services::{
    ObjectStorageFactory, RemoteClientSource, StorageFactory, StorageManager, StoreConfig,
};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppError, AppServices, ConfigBackend, RemoteBackend,
    create_app_from_env, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    config::{InMemoryConfigStore, SqlConfigStore},
    l10n::{CatalogTranslator, IdentityTranslator},
    random::OsRandomHex,
    storage::{AwsS3Client, ObjectStorageBackend, ObjectStoreClient},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, ConfigurableStorage, InMemoryConfigStore, ObjectStorageBackend,
        ObjectStoreClient, StorageError, StorageManager, StoreConfig, StoreSettings,
        WritableStorage, create_in_memory_app,
    };
}
