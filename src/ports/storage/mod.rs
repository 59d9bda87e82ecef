mod remote_client;
mod writable_storage;

pub use remote_client::{ObjectRequest, RemoteObjectClient};
pub use writable_storage::{ConfigurableStorage, WritableStorage};
