//! Error handling for orgaccess.
//! One error enum per concern, `thiserror` only, aggregated into [`AccessError`].

pub mod access_error;
pub mod config_error;
pub mod error_code;
pub mod storage_error;

pub use access_error::AccessError;
pub use config_error::ConfigError;
pub use error_code::AccessErrorCode;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type AccessResult<T> = Result<T, AccessError>;
