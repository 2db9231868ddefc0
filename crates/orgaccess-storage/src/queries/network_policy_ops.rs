use rusqlite::{params, Connection, Row};
use tracing::debug;

use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{NetworkAccessPolicy, OrganisationId, PolicyId};

use super::parse_timestamp;
use crate::to_storage_err;

/// Insert a network access policy.
pub fn insert_policy(conn: &Connection, policy: &NetworkAccessPolicy) -> AccessResult<()> {
    debug!(policy = %policy.id, organisation = %policy.organisation_id, "inserting network access policy");
    conn.execute(
        "INSERT INTO network_access_policies (id, organisation_id, name, allowed_ips, is_global, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            policy.id.as_str(),
            policy.organisation_id.as_str(),
            policy.name,
            policy.allowed_ips,
            policy.is_global,
            policy.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

type PolicyRow = (String, String, String, String, bool, String);

fn policy_row(row: &Row<'_>) -> rusqlite::Result<PolicyRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?))
}

/// Every policy scoped to an organisation, oldest first.
pub fn list_policies(conn: &Connection, organisation: &OrganisationId) -> AccessResult<Vec<NetworkAccessPolicy>> {
    debug!(organisation = %organisation, "listing network access policies");
    let mut stmt = conn
        .prepare(
            "SELECT id, organisation_id, name, allowed_ips, is_global, created_at
             FROM network_access_policies WHERE organisation_id = ?1
             ORDER BY created_at, id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![organisation.as_str()], policy_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (id, organisation_id, name, allowed_ips, is_global, created_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let created_at = parse_timestamp("network_access_policies", &id, &created_at)?;
        results.push(NetworkAccessPolicy {
            id: PolicyId(id),
            organisation_id: OrganisationId(organisation_id),
            name,
            allowed_ips,
            is_global,
            created_at,
        });
    }
    Ok(results)
}
