use anyhow::Context;
use async_trait::async_trait;
use aws_config::SdkConfig;
use std::{collections::HashMap, sync::Arc};

use crate::{
    adapters::outbound::storage::ObjectStorageBackend,
    ports::{ConfigStore, ConfigurableStorage, RemoteObjectClient, Translator, WritableStorage},
    services::StoreConfig,
};

/// Builds instances of one named storage backend
#[async_trait]
pub trait StorageFactory: Send + Sync + 'static {
    /// Backend identity this factory answers to
    fn name(&self) -> &'static str;

    /// Build a ready-to-use backend instance
    async fn build_storage(&self) -> anyhow::Result<Arc<dyn WritableStorage>>;

    /// Build the backend's settings panel
    async fn build_config(&self) -> anyhow::Result<Box<dyn ConfigurableStorage>>;
}

/// Remote client used by [`ObjectStorageFactory`]
#[derive(Clone)]
pub enum RemoteClientSource {
    /// Build an AWS S3 client from the stored settings on every build, on top of
    /// a shared configuration loaded once
    S3(SdkConfig),
    /// Reuse one client for every instance
    Shared(Arc<dyn RemoteObjectClient>),
}

/// Factory for the object-storage backend
///
/// Settings are re-read from the config store on every build, so a backend built
/// after a successful save sees the new values.
#[derive(Clone)]
pub struct ObjectStorageFactory {
    config: Arc<dyn ConfigStore>,
    l10n: Arc<dyn Translator>,
    client: RemoteClientSource,
}

impl ObjectStorageFactory {
    pub fn new(
        config: Arc<dyn ConfigStore>,
        l10n: Arc<dyn Translator>,
        client: RemoteClientSource,
    ) -> Self {
        Self {
            config,
            l10n,
            client,
        }
    }

    async fn load_config(&self) -> anyhow::Result<StoreConfig> {
        StoreConfig::load(self.config.clone(), self.l10n.clone())
            .await
            .context("Failed to load object storage settings")
    }
}

#[async_trait]
impl StorageFactory for ObjectStorageFactory {
    fn name(&self) -> &'static str {
        ObjectStorageBackend::NAME
    }

    async fn build_storage(&self) -> anyhow::Result<Arc<dyn WritableStorage>> {
        let config = self.load_config().await?;
        let backend = match &self.client {
            RemoteClientSource::S3(shared) => {
                ObjectStorageBackend::with_sdk_config(shared, config.settings())?
            }
            RemoteClientSource::Shared(client) => {
                ObjectStorageBackend::with_client(client.clone(), config.settings())
            }
        };
        Ok(Arc::new(backend))
    }

    async fn build_config(&self) -> anyhow::Result<Box<dyn ConfigurableStorage>> {
        Ok(Box::new(self.load_config().await?))
    }
}

/// Registry of storage backends, keyed by backend name
///
/// Built once by the composition root; there is no process-wide registry.
#[derive(Clone, Default)]
pub struct StorageManager {
    factories: HashMap<&'static str, Arc<dyn StorageFactory>>,
}

impl StorageManager {
    pub fn builder() -> StorageManagerBuilder {
        StorageManagerBuilder::default()
    }

    /// Backend instance for `name`, or `None` when no such backend is registered
    pub async fn storage_instance(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<Arc<dyn WritableStorage>>> {
        match self.factories.get(name) {
            Some(factory) => Ok(Some(factory.build_storage().await?)),
            None => Ok(None),
        }
    }

    /// Settings panel for `name`, or `None` when no such backend is registered
    pub async fn storage_config(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<Box<dyn ConfigurableStorage>>> {
        match self.factories.get(name) {
            Some(factory) => Ok(Some(factory.build_config().await?)),
            None => Ok(None),
        }
    }

    /// Registered backend names, sorted
    pub fn backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

/// Builder for [`StorageManager`]
#[derive(Default)]
pub struct StorageManagerBuilder {
    factories: HashMap<&'static str, Arc<dyn StorageFactory>>,
}

impl StorageManagerBuilder {
    /// Register a factory; a later registration under the same name replaces the earlier one
    pub fn register(mut self, factory: impl StorageFactory) -> Self {
        self.factories.insert(factory.name(), Arc::new(factory));
        self
    }

    pub fn build(self) -> StorageManager {
        StorageManager {
            factories: self.factories,
        }
    }
}
