//! Organisation membership records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{MemberId, OrganisationId, RoleId, UserId};

/// Links a user to exactly one organisation and exactly one role.
///
/// Removal sets `deleted_at`; records are never hard-deleted so audit
/// history survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationMember {
    pub id: MemberId,
    pub organisation_id: OrganisationId,
    pub user_id: UserId,
    pub role_id: RoleId,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl OrganisationMember {
    /// A member is active iff it has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}
