use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{OrganisationId, PermissionPolicy, Role, RoleId};
use orgaccess_core::traits::RoleFilter;

use super::parse_timestamp;
use crate::{corrupt, to_storage_err};

const ROLE_COLUMNS: &str =
    "id, organisation_id, name, description, color, permissions, is_default, created_at";

/// A role as stored, before decoding.
#[derive(Debug, Clone)]
pub struct RoleRow {
    pub id: String,
    pub organisation_id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub permissions: String,
    pub is_default: bool,
    pub created_at: String,
}

impl RoleRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            organisation_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            color: row.get(4)?,
            permissions: row.get(5)?,
            is_default: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    pub fn into_role(self) -> AccessResult<Role> {
        let permissions = PermissionPolicy::from_json(&self.permissions)
            .map_err(|e| corrupt("roles", &self.id, format!("bad permissions: {e}")))?;
        let created_at = parse_timestamp("roles", &self.id, &self.created_at)?;
        Ok(Role {
            id: RoleId(self.id),
            organisation_id: OrganisationId(self.organisation_id),
            name: self.name,
            description: self.description,
            color: self.color,
            permissions,
            is_default: self.is_default,
            created_at,
        })
    }
}

/// Insert a role.
pub fn insert_role(conn: &Connection, role: &Role) -> AccessResult<()> {
    debug!(role = %role.id, organisation = %role.organisation_id, name = %role.name, "inserting role");
    let permissions = role.permissions.to_json()?;
    conn.execute(
        "INSERT INTO roles (id, organisation_id, name, description, color, permissions, is_default, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            role.id.as_str(),
            role.organisation_id.as_str(),
            role.name,
            role.description,
            role.color,
            permissions,
            role.is_default,
            role.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a role by ID.
pub fn get_role(conn: &Connection, id: &RoleId) -> AccessResult<Option<Role>> {
    debug!(role = %id, "getting role");
    let row = conn
        .query_row(
            &format!("SELECT {ROLE_COLUMNS} FROM roles WHERE id = ?1"),
            params![id.as_str()],
            RoleRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(RoleRow::into_role).transpose()
}

/// Roles matching every populated field of `filter`, oldest first.
pub fn find_roles(conn: &Connection, filter: &RoleFilter) -> AccessResult<Vec<Role>> {
    debug!(?filter, "finding roles");
    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(org) = &filter.organisation {
        values.push(Box::new(org.0.clone()));
        clauses.push(format!("organisation_id = ?{}", values.len()));
    }
    if !filter.names.is_empty() {
        let mut slots = Vec::with_capacity(filter.names.len());
        for name in &filter.names {
            values.push(Box::new(name.to_ascii_lowercase()));
            slots.push(format!("?{}", values.len()));
        }
        clauses.push(format!("LOWER(name) IN ({})", slots.join(", ")));
    }
    if let Some(flag) = filter.global_access {
        values.push(Box::new(flag));
        clauses.push(format!(
            "COALESCE(json_extract(permissions, '$.global_access'), 0) = ?{}",
            values.len()
        ));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    let sql = format!("SELECT {ROLE_COLUMNS} FROM roles{where_sql} ORDER BY created_at, id");

    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let params_refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt
        .query_map(params_refs.as_slice(), RoleRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(row.into_role()?);
    }
    Ok(results)
}

/// Every role's id and name, oldest first. Permission JSON is not read.
pub fn list_role_names(conn: &Connection) -> AccessResult<Vec<(RoleId, String)>> {
    debug!("listing role names");
    let mut stmt = conn
        .prepare("SELECT id, name FROM roles ORDER BY created_at, id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok((RoleId(row.get(0)?), row.get(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Replace a role's permission JSON. Returns whether a row was updated.
pub fn update_role_permissions(
    conn: &Connection,
    id: &RoleId,
    permissions: &PermissionPolicy,
) -> AccessResult<bool> {
    debug!(role = %id, "updating role permissions");
    let json = permissions.to_json()?;
    let changed = conn
        .execute(
            "UPDATE roles SET permissions = ?2 WHERE id = ?1",
            params![id.as_str(), json],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}
