// Error conversions from the underlying client libraries
pub mod error;

// Storage implementations
pub mod object_storage_backend;
pub mod object_store_client;

// Provider-specific implementations
pub mod s3;

// Re-export key types
pub use object_storage_backend::ObjectStorageBackend;
pub use object_store_client::ObjectStoreClient;
pub use s3::AwsS3Client;
