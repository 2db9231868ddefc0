use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{Organisation, OrganisationId};

use super::parse_timestamp;
use crate::to_storage_err;

/// Insert an organisation.
pub fn insert_organisation(conn: &Connection, org: &Organisation) -> AccessResult<()> {
    debug!(organisation = %org.id, name = %org.name, "inserting organisation");
    conn.execute(
        "INSERT INTO organisations (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![org.id.as_str(), org.name, org.created_at.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get an organisation by ID.
pub fn get_organisation(conn: &Connection, id: &OrganisationId) -> AccessResult<Option<Organisation>> {
    debug!(organisation = %id, "getting organisation");
    let row: Option<(String, String, String)> = conn
        .query_row(
            "SELECT id, name, created_at FROM organisations WHERE id = ?1",
            params![id.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.map(|(id, name, created_at)| {
        let created_at = parse_timestamp("organisations", &id, &created_at)?;
        Ok(Organisation {
            id: OrganisationId(id),
            name,
            created_at,
        })
    })
    .transpose()
}
