//! v002: per-organisation network access policies.

use rusqlite::Connection;

use orgaccess_core::errors::AccessResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> AccessResult<()> {
    tracing::info!("v002: creating network access policy table");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS network_access_policies (
            id              TEXT PRIMARY KEY,
            organisation_id TEXT NOT NULL,
            name            TEXT NOT NULL,
            allowed_ips     TEXT NOT NULL,
            is_global       INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL,
            FOREIGN KEY (organisation_id) REFERENCES organisations(id)
        );

        CREATE INDEX IF NOT EXISTS idx_nap_org ON network_access_policies(organisation_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(())
}
