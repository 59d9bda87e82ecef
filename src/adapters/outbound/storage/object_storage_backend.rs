use async_trait::async_trait;
use aws_config::SdkConfig;
use bytes::Bytes;
use std::sync::Arc;

use crate::{
    adapters::outbound::{random::OsRandomHex, storage::s3::AwsS3Client},
    domain::{
        errors::{StorageError, StorageOperation, StorageResult},
        models::StoreSettings,
        value_objects::{ObjectAcl, Reference, StoredObjectKey},
    },
    ports::{ObjectRequest, ReferenceGenerator, RemoteObjectClient, WritableStorage},
};

/// Storage backend that keeps blobs in an S3-compatible bucket
///
/// The whole blob is held in memory on both directions; the storage interface has
/// no streaming. Objects are always read back through this backend, so the bucket
/// never needs a public ACL or bucket policy.
pub struct ObjectStorageBackend {
    client: Arc<dyn RemoteObjectClient>,
    references: Arc<dyn ReferenceGenerator>,
    bucket: String,
    prefix: String,
}

impl ObjectStorageBackend {
    pub const NAME: &'static str = "ObjectStorage";

    /// S3 backend on top of a shared AWS configuration, using the region and
    /// endpoint from `settings`
    pub fn with_sdk_config(shared: &SdkConfig, settings: &StoreSettings) -> anyhow::Result<Self> {
        let client = AwsS3Client::new(shared, settings)?;
        Ok(Self::with_client(Arc::new(client), settings))
    }

    /// Use an already-built remote client
    pub fn with_client(client: Arc<dyn RemoteObjectClient>, settings: &StoreSettings) -> Self {
        Self {
            client,
            references: Arc::new(OsRandomHex::default()),
            bucket: settings.bucket.clone(),
            prefix: settings.prefix.clone(),
        }
    }

    pub fn with_reference_generator(mut self, references: Arc<dyn ReferenceGenerator>) -> Self {
        self.references = references;
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Remote key for a reference
    pub fn object_key(&self, reference: &Reference) -> StoredObjectKey {
        StoredObjectKey::new(&self.prefix, reference)
    }

    fn request(&self, reference: &Reference) -> ObjectRequest {
        ObjectRequest::new(self.bucket.clone(), self.object_key(reference))
    }

    /// Head check that tells an unknown reference apart from a failing service
    async fn existing(
        &self,
        reference: &Reference,
        operation: StorageOperation,
    ) -> StorageResult<ObjectRequest> {
        let request = self.request(reference);
        if let Err(err) = self.client.head_object(&request).await {
            tracing::debug!(key = %request.key, error = %err, "Reference check failed");
            return Err(StorageError::reference(
                Self::NAME,
                operation,
                reference.as_str(),
                err,
            ));
        }
        Ok(request)
    }
}

#[async_trait]
impl WritableStorage for ObjectStorageBackend {
    #[tracing::instrument(skip(self), fields(bucket = %self.bucket))]
    async fn get(&self, reference: &str) -> StorageResult<Bytes> {
        let reference = Reference::new(reference);
        let request = self.existing(&reference, StorageOperation::Load).await?;

        let body = self.client.get_object(&request).await.map_err(|err| {
            tracing::warn!(key = %request.key, error = %err, "Failed to load object");
            StorageError::remote(Self::NAME, StorageOperation::Load, reference.as_str(), err)
        })?;

        tracing::debug!(key = %request.key, size = body.len(), "Loaded object");
        Ok(body)
    }

    #[tracing::instrument(skip(self, data), fields(bucket = %self.bucket, size = data.len()))]
    async fn put(&self, data: Bytes, reference: Option<&str>) -> StorageResult<String> {
        let reference = match Reference::explicit(reference) {
            Some(reference) => reference,
            None => self.references.generate().map(Reference::new).map_err(|err| {
                tracing::warn!(error = %err, "Failed to generate a reference");
                StorageError::local(Self::NAME, StorageOperation::GenerateReference, err)
            })?,
        };
        let request = self.request(&reference);

        self.client
            .put_object(&request, data, ObjectAcl::BucketOwnerFullControl)
            .await
            .map_err(|err| {
                tracing::warn!(key = %request.key, error = %err, "Failed to store object");
                StorageError::remote(Self::NAME, StorageOperation::Store, reference.as_str(), err)
            })?;

        tracing::debug!(key = %request.key, "Stored object");
        Ok(reference.into_string())
    }

    #[tracing::instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete(&self, reference: &str) -> StorageResult<()> {
        let reference = Reference::new(reference);
        let request = self.existing(&reference, StorageOperation::Delete).await?;

        self.client.delete_object(&request).await.map_err(|err| {
            tracing::warn!(key = %request.key, error = %err, "Failed to delete object");
            StorageError::remote(Self::NAME, StorageOperation::Delete, reference.as_str(), err)
        })?;

        tracing::debug!(key = %request.key, "Deleted object");
        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl std::fmt::Display for ObjectStorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::NAME)
    }
}
