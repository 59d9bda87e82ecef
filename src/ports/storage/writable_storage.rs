use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    errors::{ConfigResult, StorageResult},
    models::{OptionErrors, StorageOptions},
};
use std::collections::HashMap;

/// Port the host's storage manager dispatches blob operations to
#[async_trait]
pub trait WritableStorage: Send + Sync + 'static {
    /// Load the blob stored under `reference`
    async fn get(&self, reference: &str) -> StorageResult<Bytes>;

    /// Store `data`, generating a reference when none (or an empty one) is given.
    /// Returns the reference actually used.
    async fn put(&self, data: Bytes, reference: Option<&str>) -> StorageResult<String>;

    /// Remove the blob stored under `reference`
    async fn delete(&self, reference: &str) -> StorageResult<()>;

    /// Backend identity used for routing
    fn name(&self) -> &'static str;
}

/// Port for a backend's settings panel
#[async_trait]
pub trait ConfigurableStorage: Send + Sync + 'static {
    /// Current settings as a self-describing schema
    fn get_options(&self) -> StorageOptions;

    /// Validate and persist a submitted form. Returns field-keyed validation errors,
    /// empty on success.
    async fn save_options(
        &mut self,
        submission: &HashMap<String, String>,
    ) -> ConfigResult<OptionErrors>;
}
