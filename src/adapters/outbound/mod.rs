pub mod config;
pub mod l10n;
pub mod random;
pub mod storage;
