//! # orgaccess-storage
//!
//! SQLite persistence for access control: a single serialized write
//! connection, a WAL read pool, versioned schema migrations, raw query
//! modules, and [`StorageEngine`] implementing the `orgaccess-core` store
//! traits.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use orgaccess_core::errors::{AccessError, StorageError};

/// Wrap a SQLite failure message in the workspace error type.
pub(crate) fn to_storage_err(message: String) -> AccessError {
    AccessError::Storage(StorageError::SqliteError { message })
}

/// A stored value that could not be decoded into its model type.
pub(crate) fn corrupt(table: &str, id: &str, reason: impl ToString) -> AccessError {
    AccessError::Storage(StorageError::CorruptRecord {
        table: table.to_string(),
        id: id.to_string(),
        reason: reason.to_string(),
    })
}
