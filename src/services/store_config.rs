use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

use crate::{
    domain::{
        errors::ConfigResult,
        models::{OptionErrors, OptionField, OptionKind, StorageOptions, StoreField, StoreSettings},
    },
    ports::{ConfigStore, ConfigurableStorage, Translator},
};

/// Settings panel for the object-storage backend
///
/// Values are read from the config store once, at load time. Later changes to the
/// backing store made by anyone other than this instance are not observed.
///
/// Credentials are deliberately absent: they come from the AWS provider chain
/// (environment, `~/.aws/credentials`, instance profile).
pub struct StoreConfig {
    config: Arc<dyn ConfigStore>,
    l10n: Arc<dyn Translator>,
    settings: StoreSettings,
}

impl StoreConfig {
    /// Config namespace all settings are persisted under
    pub const NAMESPACE: &'static str = "storage";

    /// Load the current settings from the config store
    pub async fn load(
        config: Arc<dyn ConfigStore>,
        l10n: Arc<dyn Translator>,
    ) -> ConfigResult<Self> {
        let mut settings = StoreSettings::default();
        for field in StoreField::ALL {
            let value = config.get(Self::NAMESPACE, field.config_key(), "").await?;
            settings.set(field, value);
        }

        Ok(Self {
            config,
            l10n,
            settings,
        })
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// AWS region. Required for Amazon S3.
    pub fn region(&self) -> &str {
        &self.settings.region
    }

    /// S3 endpoint. Required for S3-compatible services other than Amazon's.
    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// Bucket name. Required.
    pub fn bucket(&self) -> &str {
        &self.settings.bucket
    }

    /// Key prefix. Optional, typically ends with `/` or `-`.
    pub fn prefix(&self) -> &str {
        &self.settings.prefix
    }

    fn label(field: StoreField) -> &'static str {
        match field {
            StoreField::Region => "The AWS region",
            StoreField::Endpoint => "The S3 endpoint",
            StoreField::Bucket => "The S3 bucket",
            StoreField::Prefix => "The bucket path prefix",
        }
    }

    fn help(field: StoreField) -> &'static str {
        match field {
            StoreField::Region => {
                r#"Enter the AWS region, e.g. "eu-west-1". This is required for Amazon AWS S3."#
            }
            StoreField::Endpoint => {
                r#"Enter the S3 endpoint, e.g. "s3.eu-west-1.amazonaws.com". This is optional for Amazon AWS S3 but required for other S3 compatible services."#
            }
            StoreField::Bucket => {
                r#"Enter the S3 bucket name, e.g. "my-bucket-example-org". This is required."#
            }
            StoreField::Prefix => {
                r#"Enter the path prefix to use for objects in the bucket, e.g. "photos/" or "friendica-". This is optional and defaults to "". It is useful if the bucket is used for other things as well."#
            }
        }
    }
}

#[async_trait]
impl ConfigurableStorage for StoreConfig {
    fn get_options(&self) -> StorageOptions {
        let mut options = StorageOptions::new();
        for field in StoreField::ALL {
            options.push(
                field.name(),
                OptionField {
                    kind: OptionKind::Text,
                    label: self.l10n.translate(Self::label(field)),
                    value: self.settings.get(field).to_string(),
                    help: self.l10n.translate(Self::help(field)),
                },
            );
        }
        options
    }

    async fn save_options(
        &mut self,
        submission: &HashMap<String, String>,
    ) -> ConfigResult<OptionErrors> {
        let mut submitted = StoreSettings::default();
        for field in StoreField::ALL {
            let value = submission.get(field.name()).cloned().unwrap_or_default();
            submitted.set(field, value);
        }

        if submitted.bucket.is_empty() {
            let mut errors = OptionErrors::new();
            errors.insert(
                StoreField::Bucket.name().to_string(),
                self.l10n.translate("Enter a bucket name"),
            );
            return Ok(errors);
        }

        for field in StoreField::ALL {
            self.config
                .set(Self::NAMESPACE, field.config_key(), submitted.get(field))
                .await?;
        }
        self.settings = submitted;

        tracing::info!(
            bucket = %self.settings.bucket,
            prefix = %self.settings.prefix,
            "Saved object storage settings"
        );

        Ok(OptionErrors::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::{config::InMemoryConfigStore, l10n::IdentityTranslator};

    fn submission(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn setup() -> (Arc<InMemoryConfigStore>, StoreConfig) {
        let store = Arc::new(InMemoryConfigStore::new());
        let config = StoreConfig::load(store.clone(), Arc::new(IdentityTranslator))
            .await
            .unwrap();
        (store, config)
    }

    #[tokio::test]
    async fn test_defaults_are_empty() {
        let (_, config) = setup().await;
        assert_eq!(config.region(), "");
        assert_eq!(config.endpoint(), "");
        assert_eq!(config.bucket(), "");
        assert_eq!(config.prefix(), "");
    }

    #[tokio::test]
    async fn test_options_schema_order() {
        let (_, config) = setup().await;
        let options = config.get_options();

        assert_eq!(
            options.names().collect::<Vec<_>>(),
            ["region", "endpoint", "bucket", "prefix"]
        );
        let bucket = options.get("bucket").unwrap();
        assert_eq!(bucket.kind, OptionKind::Text);
        assert_eq!(bucket.label, "The S3 bucket");
        assert!(bucket.help.contains("This is required."));
    }

    #[tokio::test]
    async fn test_save_rejects_missing_bucket() {
        let (store, mut config) = setup().await;
        let errors = config
            .save_options(&submission(&[("region", "eu-west-1"), ("prefix", "x/")]))
            .await
            .unwrap();

        assert_eq!(errors.get("bucket").unwrap(), "Enter a bucket name");
        assert_eq!(config.region(), "");
        assert_eq!(
            store
                .get(StoreConfig::NAMESPACE, "objectstorage_region", "unset")
                .await
                .unwrap(),
            "unset"
        );
    }

    #[tokio::test]
    async fn test_save_persists_all_fields() {
        let (store, mut config) = setup().await;
        let errors = config
            .save_options(&submission(&[
                ("bucket", "b"),
                ("region", "eu-west-1"),
                ("endpoint", ""),
                ("prefix", "x/"),
            ]))
            .await
            .unwrap();

        assert!(errors.is_empty());
        assert_eq!(config.bucket(), "b");
        assert_eq!(config.region(), "eu-west-1");
        assert_eq!(config.prefix(), "x/");

        let reloaded = StoreConfig::load(store, Arc::new(IdentityTranslator))
            .await
            .unwrap();
        assert_eq!(reloaded.settings(), config.settings());
    }
}
