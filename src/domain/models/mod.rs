mod options;
mod store_settings;

pub use options::{OptionErrors, OptionField, OptionKind, StorageOptions};
pub use store_settings::{StoreField, StoreSettings};
