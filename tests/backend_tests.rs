use async_trait::async_trait;
use bytes::Bytes;
use objectstorage_backend::{
    ObjectAcl, ObjectRequest, ObjectStorageBackend, ObjectStoreClient, RemoteError,
    RemoteObjectClient, StorageOperation, StoreSettings, WritableStorage,
    domain::RemoteResult,
};
use object_store::memory::InMemory;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Remote client that records every write and serves what it was given
#[derive(Default)]
struct RecordingClient {
    objects: Mutex<HashMap<(String, String), Bytes>>,
    writes: Mutex<Vec<(String, String, ObjectAcl)>>,
}

impl RecordingClient {
    fn id(request: &ObjectRequest) -> (String, String) {
        (request.bucket.clone(), request.key.as_str().to_string())
    }

    fn missing(request: &ObjectRequest) -> RemoteError {
        RemoteError::new(
            "NotFound",
            format!("{} not found", request.key),
            std::io::Error::other("404"),
        )
    }
}

#[async_trait]
impl RemoteObjectClient for RecordingClient {
    async fn head_object(&self, request: &ObjectRequest) -> RemoteResult<()> {
        let objects = self.objects.lock().unwrap();
        match objects.contains_key(&Self::id(request)) {
            true => Ok(()),
            false => Err(Self::missing(request)),
        }
    }

    async fn get_object(&self, request: &ObjectRequest) -> RemoteResult<Bytes> {
        let objects = self.objects.lock().unwrap();
        objects
            .get(&Self::id(request))
            .cloned()
            .ok_or_else(|| Self::missing(request))
    }

    async fn put_object(
        &self,
        request: &ObjectRequest,
        body: Bytes,
        acl: ObjectAcl,
    ) -> RemoteResult<()> {
        let (bucket, key) = Self::id(request);
        self.writes
            .lock()
            .unwrap()
            .push((bucket.clone(), key.clone(), acl));
        self.objects.lock().unwrap().insert((bucket, key), body);
        Ok(())
    }

    async fn delete_object(&self, request: &ObjectRequest) -> RemoteResult<()> {
        self.objects.lock().unwrap().remove(&Self::id(request));
        Ok(())
    }
}

/// Remote client whose objects all exist but every transfer fails
struct FaultyClient;

impl FaultyClient {
    fn slow_down() -> RemoteError {
        RemoteError::new(
            "SlowDown",
            "Please reduce your request rate",
            std::io::Error::other("503"),
        )
    }
}

#[async_trait]
impl RemoteObjectClient for FaultyClient {
    async fn head_object(&self, _request: &ObjectRequest) -> RemoteResult<()> {
        Ok(())
    }

    async fn get_object(&self, _request: &ObjectRequest) -> RemoteResult<Bytes> {
        Err(Self::slow_down())
    }

    async fn put_object(
        &self,
        _request: &ObjectRequest,
        _body: Bytes,
        _acl: ObjectAcl,
    ) -> RemoteResult<()> {
        Err(Self::slow_down())
    }

    async fn delete_object(&self, _request: &ObjectRequest) -> RemoteResult<()> {
        Err(Self::slow_down())
    }
}

fn settings(bucket: &str, prefix: &str) -> StoreSettings {
    StoreSettings {
        bucket: bucket.to_string(),
        prefix: prefix.to_string(),
        ..Default::default()
    }
}

fn in_memory_backend() -> ObjectStorageBackend {
    let client = Arc::new(ObjectStoreClient::new(Arc::new(InMemory::new())));
    ObjectStorageBackend::with_client(client, &settings("uploads", ""))
}

#[tokio::test]
async fn put_writes_prefixed_key_with_owner_acl() {
    let client = Arc::new(RecordingClient::default());
    let backend = ObjectStorageBackend::with_client(client.clone(), &settings("media", "photos/"));

    let reference = backend
        .put(Bytes::from("jpeg bytes"), Some("abc123"))
        .await
        .unwrap();

    assert_eq!(reference, "abc123");
    let writes = client.writes.lock().unwrap().clone();
    assert_eq!(
        writes,
        [(
            "media".to_string(),
            "photos/abc123".to_string(),
            ObjectAcl::BucketOwnerFullControl
        )]
    );
}

#[tokio::test]
async fn empty_reference_generates_a_new_one() {
    let client = Arc::new(RecordingClient::default());
    let backend = ObjectStorageBackend::with_client(client.clone(), &settings("media", "p-"));

    let reference = backend.put(Bytes::from("x"), Some("")).await.unwrap();

    assert_eq!(reference.len(), 32);
    let writes = client.writes.lock().unwrap().clone();
    assert_eq!(writes[0].1, format!("p-{}", reference));
}

#[tokio::test]
async fn generated_references_are_distinct() {
    let backend = in_memory_backend();

    let first = backend.put(Bytes::from("a"), None).await.unwrap();
    let second = backend.put(Bytes::from("a"), None).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn put_overwrites_existing_reference() {
    let backend = in_memory_backend();

    backend.put(Bytes::from("A"), Some("r")).await.unwrap();
    backend.put(Bytes::from("B"), Some("r")).await.unwrap();

    assert_eq!(backend.get("r").await.unwrap(), Bytes::from("B"));
}

#[tokio::test]
async fn empty_blob_round_trips() {
    let backend = in_memory_backend();

    let reference = backend.put(Bytes::new(), None).await.unwrap();

    assert!(backend.get(&reference).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_reference_is_a_reference_error() {
    let backend = in_memory_backend();

    let err = backend.get("nonexistent").await.unwrap_err();
    assert!(err.is_reference());
    assert_eq!(err.operation(), StorageOperation::Load);

    let err = backend.delete("nonexistent").await.unwrap_err();
    assert!(err.is_reference());
    assert_eq!(err.operation(), StorageOperation::Delete);
    assert_eq!(
        err.to_string(),
        "ObjectStorage storage failed to delete the file nonexistent, the file is invalid"
    );
}

#[tokio::test]
async fn delete_then_get_fails() {
    let backend = in_memory_backend();

    backend.put(Bytes::from("gone"), Some("tmp")).await.unwrap();
    backend.delete("tmp").await.unwrap();

    assert!(backend.get("tmp").await.unwrap_err().is_reference());
}

#[tokio::test]
async fn transfer_failure_is_a_backend_error() {
    let backend = ObjectStorageBackend::with_client(Arc::new(FaultyClient), &settings("b", ""));

    let err = backend.get("k1").await.unwrap_err();
    assert!(err.is_backend());
    assert_eq!(err.code(), Some("SlowDown"));
    assert_eq!(err.to_string(), "ObjectStorage storage failed to load the data (SlowDown)");

    let err = backend.put(Bytes::from("x"), Some("k1")).await.unwrap_err();
    assert!(err.is_backend());
    assert_eq!(err.operation(), StorageOperation::Store);

    let err = backend.delete("k1").await.unwrap_err();
    assert!(err.is_backend());
    assert_eq!(err.operation(), StorageOperation::Delete);
}

#[tokio::test]
async fn backend_name() {
    let backend = in_memory_backend();
    assert_eq!(backend.name(), "ObjectStorage");
    assert_eq!(backend.to_string(), "ObjectStorage");
}
