use serde::{Deserialize, Serialize};

use crate::constants;

/// SQLite store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. Default: "orgaccess.db".
    pub db_path: String,
    /// Read connections for file-backed stores. Default: 4, max 8.
    pub read_pool_size: usize,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: constants::DEFAULT_DB_FILENAME.to_string(),
            read_pool_size: constants::DEFAULT_READ_POOL_SIZE,
            busy_timeout_ms: constants::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
