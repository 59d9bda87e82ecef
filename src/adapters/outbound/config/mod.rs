mod in_memory_config_store;
mod sql_config_store;

pub use in_memory_config_store::InMemoryConfigStore;
pub use sql_config_store::SqlConfigStore;
