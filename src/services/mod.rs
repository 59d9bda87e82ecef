mod storage_manager;
mod store_config;

pub use storage_manager::{
    ObjectStorageFactory, RemoteClientSource, StorageFactory, StorageManager,
    StorageManagerBuilder,
};
pub use store_config::StoreConfig;
