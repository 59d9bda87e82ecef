use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{domain::errors::ConfigResult, ports::ConfigStore};

/// In-memory implementation of ConfigStore for testing and development
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    // (namespace, key) -> value
    data: Arc<RwLock<HashMap<(String, String), String>>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `(namespace, key, value)` entries
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let data = values
            .into_iter()
            .map(|(namespace, key, value)| {
                ((namespace.to_string(), key.to_string()), value.to_string())
            })
            .collect();
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get(&self, namespace: &str, key: &str, default: &str) -> ConfigResult<String> {
        let data = self.data.read().await;
        Ok(data
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> ConfigResult<()> {
        let mut data = self.data.write().await;
        data.insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
