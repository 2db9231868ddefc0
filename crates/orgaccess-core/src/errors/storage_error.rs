use super::error_code::{self, AccessErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("schema migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt record in {table} ({id}): {reason}")]
    CorruptRecord {
        table: String,
        id: String,
        reason: String,
    },
}

impl AccessErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CorruptRecord { .. } => error_code::DB_CORRUPT,
            Self::SqliteError { .. } | Self::MigrationFailed { .. } => error_code::STORAGE_ERROR,
        }
    }
}
