use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    errors::RemoteResult,
    value_objects::{ObjectAcl, StoredObjectKey},
};

/// Addresses one object in the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRequest {
    pub bucket: String,
    pub key: StoredObjectKey,
}

impl ObjectRequest {
    pub fn new(bucket: impl Into<String>, key: StoredObjectKey) -> Self {
        Self {
            bucket: bucket.into(),
            key,
        }
    }
}

/// Port for the remote S3-compatible object-storage client
/// Each method is a single round trip; retries and timeouts belong to the client.
#[async_trait]
pub trait RemoteObjectClient: Send + Sync + 'static {
    /// Fetch object metadata, failing when the object does not exist
    async fn head_object(&self, request: &ObjectRequest) -> RemoteResult<()>;

    /// Fetch the complete object body
    async fn get_object(&self, request: &ObjectRequest) -> RemoteResult<Bytes>;

    /// Write the complete object body
    async fn put_object(
        &self,
        request: &ObjectRequest,
        body: Bytes,
        acl: ObjectAcl,
    ) -> RemoteResult<()>;

    /// Remove the object
    async fn delete_object(&self, request: &ObjectRequest) -> RemoteResult<()>;
}
