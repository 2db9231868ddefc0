//! Roles and the closed set of default role names.
//!
//! # Examples
//!
//! ```
//! use orgaccess_core::models::{DefaultRole, RoleKind};
//!
//! assert_eq!(DefaultRole::from_name("OWNER"), Some(DefaultRole::Owner));
//! assert_eq!(RoleKind::from_name("admin").rank(), 2);
//! assert_eq!(RoleKind::from_name("Tester"), RoleKind::Custom);
//! assert_eq!(RoleKind::from_name("Tester").rank(), 6);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{OrganisationId, RoleId};
use super::permissions::PermissionPolicy;

/// Rank given to every role outside the default set.
pub const CUSTOM_ROLE_RANK: u8 = 6;

/// The role names seeded into every organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DefaultRole {
    Owner,
    Admin,
    Manager,
    Developer,
    Service,
}

impl DefaultRole {
    pub const ALL: [DefaultRole; 5] = [
        DefaultRole::Owner,
        DefaultRole::Admin,
        DefaultRole::Manager,
        DefaultRole::Developer,
        DefaultRole::Service,
    ];

    /// Canonical (capitalized) name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Developer => "Developer",
            Self::Service => "Service",
        }
    }

    /// Position in role listings, 1 = first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Owner => 1,
            Self::Admin => 2,
            Self::Manager => 3,
            Self::Developer => 4,
            Self::Service => 5,
        }
    }

    /// Owner and Admin always hold global access in their organisation.
    pub fn grants_global_access(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// Case-insensitive match of a stored role name against the default set.
    pub fn from_name(name: &str) -> Option<Self> {
        let canonical = capitalize(name);
        Self::ALL.into_iter().find(|r| r.name() == canonical)
    }
}

impl std::fmt::Display for DefaultRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Default(DefaultRole),
    Custom,
}

impl RoleKind {
    pub fn from_name(name: &str) -> Self {
        DefaultRole::from_name(name).map_or(Self::Custom, Self::Default)
    }

    pub fn rank(self) -> u8 {
        match self {
            Self::Default(role) => role.rank(),
            Self::Custom => CUSTOM_ROLE_RANK,
        }
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// A named bundle of permissions assignable to members of one organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub organisation_id: OrganisationId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub permissions: PermissionPolicy,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        RoleKind::from_name(&self.name)
    }

    pub fn rank(&self) -> u8 {
        self.kind().rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("owner"), "Owner");
        assert_eq!(capitalize("ADMIN"), "Admin");
        assert_eq!(capitalize("dEVELOPER"), "Developer");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("project manager"), "Project manager");
    }

    #[test]
    fn default_names_match_case_insensitively() {
        for role in DefaultRole::ALL {
            assert_eq!(DefaultRole::from_name(&role.name().to_lowercase()), Some(role));
            assert_eq!(DefaultRole::from_name(&role.name().to_uppercase()), Some(role));
        }
        assert_eq!(DefaultRole::from_name(" Owner"), None);
        assert_eq!(DefaultRole::from_name("Owners"), None);
    }

    #[test]
    fn ranks_follow_table() {
        let ranks: Vec<u8> = DefaultRole::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(RoleKind::Custom.rank(), CUSTOM_ROLE_RANK);
    }
}
