use serde::{Deserialize, Serialize};

use super::ids::{OrganisationId, UserId};
use super::permissions::{Action, ResourceType};

/// A single permission question. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionQuery {
    pub principal: UserId,
    pub action: Action,
    pub resource: ResourceType,
    pub organisation: OrganisationId,
}

/// Outcome of evaluating a [`PermissionQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}
