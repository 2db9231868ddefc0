use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::OrganisationId;

/// A tenant owning members, roles and network access policies.
/// Referenced, never mutated, by access decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: OrganisationId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
