//! Stable error codes surfaced to the transport layer.

/// Maps an error to a stable, machine-readable code.
///
/// Transports render denials from the code rather than the message so
/// message wording can change without breaking clients.
pub trait AccessErrorCode {
    /// Returns the error code string (e.g., "NOT_A_MEMBER").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOT_A_MEMBER: &str = "NOT_A_MEMBER";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_CORRUPT: &str = "DB_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
