pub mod repositories;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use repositories::ConfigStore;
pub use services::{ReferenceGenerator, Translator};
pub use storage::{ConfigurableStorage, ObjectRequest, RemoteObjectClient, WritableStorage};
