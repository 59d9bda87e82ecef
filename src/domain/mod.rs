pub mod errors;
pub mod models;
pub mod value_objects;

// Re-export commonly used types
pub use errors::{
    BoxError, ConfigError, ConfigResult, RemoteError, RemoteResult, StorageError,
    StorageOperation, StorageResult,
};
pub use models::*;
pub use value_objects::*;
