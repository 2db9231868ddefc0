use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{MemberId, OrganisationId, OrganisationMember, RoleId, UserId};

use super::parse_timestamp;
use crate::to_storage_err;

const MEMBER_COLUMNS: &str = "id, organisation_id, user_id, role_id, created_at, deleted_at";

/// A membership as stored, before decoding.
#[derive(Debug, Clone)]
pub struct MemberRow {
    pub id: String,
    pub organisation_id: String,
    pub user_id: String,
    pub role_id: String,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

impl MemberRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            organisation_id: row.get(1)?,
            user_id: row.get(2)?,
            role_id: row.get(3)?,
            created_at: row.get(4)?,
            deleted_at: row.get(5)?,
        })
    }

    pub fn into_member(self) -> AccessResult<OrganisationMember> {
        let created_at = parse_timestamp("organisation_members", &self.id, &self.created_at)?;
        let deleted_at = self
            .deleted_at
            .as_deref()
            .map(|t| parse_timestamp("organisation_members", &self.id, t))
            .transpose()?;
        Ok(OrganisationMember {
            id: MemberId(self.id),
            organisation_id: OrganisationId(self.organisation_id),
            user_id: UserId(self.user_id),
            role_id: RoleId(self.role_id),
            created_at,
            deleted_at,
        })
    }
}

fn collect_members(
    rows: impl Iterator<Item = rusqlite::Result<MemberRow>>,
) -> AccessResult<Vec<OrganisationMember>> {
    let mut results = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(row.into_member()?);
    }
    Ok(results)
}

/// Insert a membership record.
pub fn insert_member(conn: &Connection, member: &OrganisationMember) -> AccessResult<()> {
    debug!(
        member = %member.id,
        organisation = %member.organisation_id,
        user = %member.user_id,
        "inserting member"
    );
    conn.execute(
        "INSERT INTO organisation_members (id, organisation_id, user_id, role_id, created_at, deleted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            member.id.as_str(),
            member.organisation_id.as_str(),
            member.user_id.as_str(),
            member.role_id.as_str(),
            member.created_at.to_rfc3339(),
            member.deleted_at.map(|t| t.to_rfc3339()),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a membership by ID, including soft-deleted records.
pub fn get_member(conn: &Connection, id: &MemberId) -> AccessResult<Option<OrganisationMember>> {
    debug!(member = %id, "getting member");
    let row = conn
        .query_row(
            &format!("SELECT {MEMBER_COLUMNS} FROM organisation_members WHERE id = ?1"),
            params![id.as_str()],
            MemberRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(MemberRow::into_member).transpose()
}

/// The active membership of `user` in `organisation`, if any.
pub fn get_active_membership(
    conn: &Connection,
    user: &UserId,
    organisation: &OrganisationId,
) -> AccessResult<Option<OrganisationMember>> {
    debug!(user = %user, organisation = %organisation, "getting active membership");
    let row = conn
        .query_row(
            &format!(
                "SELECT {MEMBER_COLUMNS} FROM organisation_members
                 WHERE organisation_id = ?1 AND user_id = ?2 AND deleted_at IS NULL"
            ),
            params![organisation.as_str(), user.as_str()],
            MemberRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(MemberRow::into_member).transpose()
}

/// Active members of an organisation, oldest first.
pub fn list_active_members(
    conn: &Connection,
    organisation: &OrganisationId,
) -> AccessResult<Vec<OrganisationMember>> {
    debug!(organisation = %organisation, "listing active members");
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {MEMBER_COLUMNS} FROM organisation_members
             WHERE organisation_id = ?1 AND deleted_at IS NULL
             ORDER BY created_at, id"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![organisation.as_str()], MemberRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    collect_members(rows)
}

/// Soft-delete an active membership. Returns whether a row was updated.
pub fn soft_delete_member(conn: &Connection, id: &MemberId, at: DateTime<Utc>) -> AccessResult<bool> {
    debug!(member = %id, "soft-deleting member");
    let changed = conn
        .execute(
            "UPDATE organisation_members SET deleted_at = ?2 WHERE id = ?1 AND deleted_at IS NULL",
            params![id.as_str(), at.to_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// Point an active membership at another role. Returns whether a row was updated.
pub fn update_member_role(conn: &Connection, id: &MemberId, role_id: &RoleId) -> AccessResult<bool> {
    debug!(member = %id, role = %role_id, "updating member role");
    let changed = conn
        .execute(
            "UPDATE organisation_members SET role_id = ?2 WHERE id = ?1 AND deleted_at IS NULL",
            params![id.as_str(), role_id.as_str()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}
