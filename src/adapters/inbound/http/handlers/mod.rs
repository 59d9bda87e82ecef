pub mod config_handlers;
pub mod storage_handlers;

pub use config_handlers::*;
pub use storage_handlers::*;
