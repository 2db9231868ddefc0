//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use orgaccess_core::errors::AccessResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection plus, for file-backed databases, a pool of
/// read connections.
///
/// In-memory databases have no read pool: a second in-memory connection
/// would be a separate, empty database.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    pub readers: Option<Arc<ReadPool>>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> AccessResult<Self> {
        let writer = Arc::new(WriteConnection::open(path, busy_timeout_ms)?);
        let readers = Arc::new(ReadPool::open(path, read_pool_size, busy_timeout_ms)?);
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database with only a write connection (for testing).
    pub fn open_in_memory() -> AccessResult<Self> {
        let writer = Arc::new(WriteConnection::open_in_memory()?);
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }
}
