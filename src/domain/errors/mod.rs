mod config_errors;
mod remote_errors;
mod storage_errors;

pub use config_errors::*;
pub use remote_errors::*;
pub use storage_errors::*;

/// Boxed error used wherever an underlying cause is carried across a port boundary
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
