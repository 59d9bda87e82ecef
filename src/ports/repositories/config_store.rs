use crate::domain::errors::ConfigResult;
use async_trait::async_trait;

/// Port for the host's persistent key/value configuration
///
/// Values are grouped by namespace; a missing value reads as the supplied default.
#[async_trait]
pub trait ConfigStore: Send + Sync + 'static {
    /// Read a value, falling back to `default` when it was never set
    async fn get(&self, namespace: &str, key: &str, default: &str) -> ConfigResult<String>;

    /// Persist a value, replacing any previous one
    async fn set(&self, namespace: &str, key: &str, value: &str) -> ConfigResult<()>;
}
