//! Single write connection behind a mutex.
//! Writes are serialized; the role permission rewrite relies on it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use orgaccess_core::constants::DEFAULT_BUSY_TIMEOUT_MS;
use orgaccess_core::errors::AccessResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> AccessResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database; also serves every read of an in-memory engine.
    pub fn open_in_memory() -> AccessResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    ///
    /// Blocks the calling thread until the lock is free, async runtime
    /// workers included.
    pub fn with_conn<F, T>(&self, f: F) -> AccessResult<T>
    where
        F: FnOnce(&Connection) -> AccessResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
