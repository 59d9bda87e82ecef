use async_trait::async_trait;
use bytes::Bytes;
use object_store::{ObjectStore as ApacheObjectStore, PutPayload, path::Path as ObjectPath};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{RemoteError, RemoteResult},
        value_objects::ObjectAcl,
    },
    ports::{ObjectRequest, RemoteObjectClient},
};

/// Remote client over an Apache `object_store` store
///
/// The wrapped store is already bound to one location, so the request bucket is
/// ignored. `object_store` has no notion of canned ACLs; the ACL is dropped.
/// Used for the in-memory and local filesystem backends.
#[derive(Clone)]
pub struct ObjectStoreClient {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ObjectStoreClient {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }

    /// The wrapped store
    pub fn inner(&self) -> &Arc<dyn ApacheObjectStore> {
        &self.inner
    }

    /// Store path for the request key, rejecting keys the parser would rewrite
    fn path(request: &ObjectRequest) -> RemoteResult<ObjectPath> {
        let key = request.key.as_str();
        let path = ObjectPath::parse(key).map_err(RemoteError::from)?;
        if path.as_ref() != key {
            let message = format!("key {:?} is not a canonical object path", key);
            return Err(RemoteError::new("InvalidPath", message.clone(), message));
        }
        Ok(path)
    }
}

#[async_trait]
impl RemoteObjectClient for ObjectStoreClient {
    async fn head_object(&self, request: &ObjectRequest) -> RemoteResult<()> {
        let path = Self::path(request)?;
        self.inner.head(&path).await?;
        Ok(())
    }

    async fn get_object(&self, request: &ObjectRequest) -> RemoteResult<Bytes> {
        let path = Self::path(request)?;
        let result = self.inner.get(&path).await?;
        Ok(result.bytes().await?)
    }

    async fn put_object(
        &self,
        request: &ObjectRequest,
        body: Bytes,
        _acl: ObjectAcl,
    ) -> RemoteResult<()> {
        let path = Self::path(request)?;
        self.inner.put(&path, PutPayload::from(body)).await?;
        Ok(())
    }

    async fn delete_object(&self, request: &ObjectRequest) -> RemoteResult<()> {
        let path = Self::path(request)?;
        self.inner.delete(&path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::storage::ObjectStorageBackend,
        domain::{
            models::StoreSettings,
            value_objects::{Reference, StoredObjectKey},
        },
        ports::WritableStorage,
    };
    use object_store::{local::LocalFileSystem, memory::InMemory};

    fn request(key: &str) -> ObjectRequest {
        ObjectRequest::new("ignored", StoredObjectKey::new("", &Reference::new(key)))
    }

    #[tokio::test]
    async fn test_basic_object_operations() {
        let client = ObjectStoreClient::new(Arc::new(InMemory::new()));
        let request = request("test/key");

        client
            .put_object(&request, Bytes::from("test data"), ObjectAcl::default())
            .await
            .unwrap();
        client.head_object(&request).await.unwrap();
        assert_eq!(
            client.get_object(&request).await.unwrap(),
            Bytes::from("test data")
        );

        client.delete_object(&request).await.unwrap();
        let err = client.head_object(&request).await.unwrap_err();
        assert_eq!(err.code(), "NotFound");
    }

    #[tokio::test]
    async fn test_invalid_key_is_rejected() {
        let client = ObjectStoreClient::new(Arc::new(InMemory::new()));
        let err = client
            .put_object(&request("double//slash"), Bytes::new(), ObjectAcl::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "InvalidPath");
    }

    #[tokio::test]
    async fn test_non_canonical_keys_are_distinct() {
        let client = ObjectStoreClient::new(Arc::new(InMemory::new()));
        client
            .put_object(&request("abc"), Bytes::from("v1"), ObjectAcl::default())
            .await
            .unwrap();

        for key in ["/abc", "abc/", "/"] {
            let err = client.head_object(&request(key)).await.unwrap_err();
            assert_eq!(err.code(), "InvalidPath", "key {:?}", key);
            let err = client.get_object(&request(key)).await.unwrap_err();
            assert_eq!(err.code(), "InvalidPath", "key {:?}", key);
        }
    }

    #[tokio::test]
    async fn test_slash_variants_are_unknown_references() {
        let client = Arc::new(ObjectStoreClient::new(Arc::new(InMemory::new())));
        let backend = ObjectStorageBackend::with_client(client, &StoreSettings::default());
        backend.put(Bytes::from("v1"), Some("abc")).await.unwrap();

        assert!(backend.get("/abc").await.unwrap_err().is_reference());
        assert!(backend.get("abc/").await.unwrap_err().is_reference());
        assert!(backend.delete("/abc").await.unwrap_err().is_reference());
        assert_eq!(backend.get("abc").await.unwrap(), Bytes::from("v1"));
    }

    #[tokio::test]
    async fn test_local_filesystem_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileSystem::new_with_prefix(dir.path()).unwrap();
        let client = ObjectStoreClient::new(Arc::new(store));
        let request = request("photos/abc123");

        client
            .put_object(&request, Bytes::from("on disk"), ObjectAcl::default())
            .await
            .unwrap();

        assert!(dir.path().join("photos").join("abc123").exists());
        assert_eq!(
            client.get_object(&request).await.unwrap(),
            Bytes::from("on disk")
        );
    }
}
