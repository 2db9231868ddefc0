//! v001: organisations, roles, and organisation memberships.

use rusqlite::Connection;

use orgaccess_core::errors::AccessResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> AccessResult<()> {
    tracing::info!("v001: creating organisation, role, and membership tables");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS organisations (
            id         TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        -- permissions holds the JSON permission policy
        CREATE TABLE IF NOT EXISTS roles (
            id              TEXT PRIMARY KEY,
            organisation_id TEXT NOT NULL,
            name            TEXT NOT NULL,
            description     TEXT,
            color           TEXT,
            permissions     TEXT NOT NULL DEFAULT '{}',
            is_default      INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL,
            FOREIGN KEY (organisation_id) REFERENCES organisations(id)
        );

        CREATE INDEX IF NOT EXISTS idx_roles_org ON roles(organisation_id);
        CREATE INDEX IF NOT EXISTS idx_roles_org_name ON roles(organisation_id, name COLLATE NOCASE);

        -- Soft-deleted via deleted_at, never removed
        CREATE TABLE IF NOT EXISTS organisation_members (
            id              TEXT PRIMARY KEY,
            organisation_id TEXT NOT NULL,
            user_id         TEXT NOT NULL,
            role_id         TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            deleted_at      TEXT,
            FOREIGN KEY (organisation_id) REFERENCES organisations(id),
            FOREIGN KEY (role_id) REFERENCES roles(id)
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_members_active
            ON organisation_members(organisation_id, user_id) WHERE deleted_at IS NULL;
        CREATE INDEX IF NOT EXISTS idx_members_role ON organisation_members(role_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(())
}
