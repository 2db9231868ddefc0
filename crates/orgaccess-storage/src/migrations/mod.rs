//! Versioned schema migrations. Each version runs in its own transaction
//! and is recorded in `schema_version`.

mod v001_initial_schema;
mod v002_network_access_policies;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use orgaccess_core::errors::{AccessResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> AccessResult<()>;

const MIGRATIONS: [(u32, &str, MigrationFn); 2] = [
    (1, "initial_schema", v001_initial_schema::migrate),
    (2, "network_access_policies", v002_network_access_policies::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every pending migration. Returns the number applied.
pub fn run_migrations(conn: &Connection) -> AccessResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;
    for (version, name, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        apply_one(conn, version, name, migrate).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        applied += 1;
    }
    if applied > 0 {
        info!(from = current, to = LATEST_VERSION, applied, "schema migrated");
    }
    Ok(applied)
}

fn apply_one(conn: &Connection, version: u32, name: &str, migrate: MigrationFn) -> AccessResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("migration v{version:03} begin: {e}")))?;
    migrate(&tx)?;
    tx.execute(
        "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
        params![version, name],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    tx.commit()
        .map_err(|e| to_storage_err(format!("migration v{version:03} commit: {e}")))?;
    Ok(())
}

/// Highest applied schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> AccessResult<u32> {
    let version: Option<u32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .flatten();
    Ok(version.unwrap_or(0))
}
