//! Typed capability tables keyed by closed resource and action sets.
//!
//! Stored form matches what role records have always held:
//!
//! ```json
//! {
//!   "permissions": { "Roles": ["create", "read"] },
//!   "app_permissions": { "Secrets": ["read"] },
//!   "global_access": false
//! }
//! ```
//!
//! The flag form `{"Roles": {"read": true}}` is also accepted on load.
//! Resource or action names outside the closed sets are dropped on load:
//! a permission that cannot be named cannot be granted.
//!
//! # Examples
//!
//! ```
//! use orgaccess_core::models::{Action, PermissionPolicy, ResourceType};
//!
//! let policy = PermissionPolicy::new().grant(ResourceType::Roles, &[Action::Read]);
//! assert!(policy.allows(ResourceType::Roles, Action::Read));
//! assert!(!policy.allows(ResourceType::Roles, Action::Delete));
//! assert!(!policy.allows(ResourceType::Billing, Action::Read));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An operation a role may be allowed to perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// Organisation-level resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Organisation,
    Billing,
    Apps,
    Members,
    ServiceAccounts,
    ServiceAccountTokens,
    Roles,
    IntegrationCredentials,
    NetworkAccessPolicies,
}

impl ResourceType {
    pub const ALL: [ResourceType; 9] = [
        ResourceType::Organisation,
        ResourceType::Billing,
        ResourceType::Apps,
        ResourceType::Members,
        ResourceType::ServiceAccounts,
        ResourceType::ServiceAccountTokens,
        ResourceType::Roles,
        ResourceType::IntegrationCredentials,
        ResourceType::NetworkAccessPolicies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organisation => "Organisation",
            Self::Billing => "Billing",
            Self::Apps => "Apps",
            Self::Members => "Members",
            Self::ServiceAccounts => "ServiceAccounts",
            Self::ServiceAccountTokens => "ServiceAccountTokens",
            Self::Roles => "Roles",
            Self::IntegrationCredentials => "IntegrationCredentials",
            Self::NetworkAccessPolicies => "NetworkAccessPolicies",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown resource type: {s}"))
    }
}

/// Resource types scoped to a single app inside an organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AppResourceType {
    Environments,
    Secrets,
    Logs,
    Tokens,
    Members,
    ServiceAccounts,
    Integrations,
    EncryptionMode,
}

impl AppResourceType {
    pub const ALL: [AppResourceType; 8] = [
        AppResourceType::Environments,
        AppResourceType::Secrets,
        AppResourceType::Logs,
        AppResourceType::Tokens,
        AppResourceType::Members,
        AppResourceType::ServiceAccounts,
        AppResourceType::Integrations,
        AppResourceType::EncryptionMode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Environments => "Environments",
            Self::Secrets => "Secrets",
            Self::Logs => "Logs",
            Self::Tokens => "Tokens",
            Self::Members => "Members",
            Self::ServiceAccounts => "ServiceAccounts",
            Self::Integrations => "Integrations",
            Self::EncryptionMode => "EncryptionMode",
        }
    }
}

impl fmt::Display for AppResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown app resource type: {s}"))
    }
}

/// The permission set carried by a role.
///
/// A resource that is absent from the table, or present without the action,
/// is an implicit deny.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredPolicy", into = "StoredPolicy")]
pub struct PermissionPolicy {
    permissions: BTreeMap<ResourceType, BTreeSet<Action>>,
    app_permissions: BTreeMap<AppResourceType, BTreeSet<Action>>,
    /// Grants visibility across every resource in the organisation.
    pub global_access: bool,
}

impl PermissionPolicy {
    /// An empty policy: every check denies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every action on every organisation and app resource.
    pub fn full() -> Self {
        let mut policy = Self::new();
        for resource in ResourceType::ALL {
            policy = policy.grant(resource, &Action::ALL);
        }
        for resource in AppResourceType::ALL {
            policy = policy.grant_app(resource, &Action::ALL);
        }
        policy
    }

    /// Add actions on an organisation-level resource.
    pub fn grant(mut self, resource: ResourceType, actions: &[Action]) -> Self {
        self.permissions
            .entry(resource)
            .or_default()
            .extend(actions.iter().copied());
        self
    }

    /// Add actions on an app-level resource.
    pub fn grant_app(mut self, resource: AppResourceType, actions: &[Action]) -> Self {
        self.app_permissions
            .entry(resource)
            .or_default()
            .extend(actions.iter().copied());
        self
    }

    pub fn with_global_access(mut self, global_access: bool) -> Self {
        self.global_access = global_access;
        self
    }

    /// Whether `action` on the organisation-level `resource` is granted.
    pub fn allows(&self, resource: ResourceType, action: Action) -> bool {
        self.permissions
            .get(&resource)
            .is_some_and(|actions| actions.contains(&action))
    }

    /// Whether `action` on the app-level `resource` is granted.
    pub fn allows_app(&self, resource: AppResourceType, action: Action) -> bool {
        self.app_permissions
            .get(&resource)
            .is_some_and(|actions| actions.contains(&action))
    }

    /// Parse the stored JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the stored JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ── Stored form ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredPolicy {
    #[serde(default)]
    permissions: BTreeMap<String, StoredActions>,
    #[serde(default)]
    app_permissions: BTreeMap<String, StoredActions>,
    #[serde(default)]
    global_access: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredActions {
    List(Vec<String>),
    Flags(BTreeMap<String, bool>),
}

impl StoredActions {
    fn granted(self) -> BTreeSet<Action> {
        match self {
            Self::List(names) => names.iter().filter_map(|n| n.parse().ok()).collect(),
            Self::Flags(flags) => flags
                .into_iter()
                .filter(|(_, on)| *on)
                .filter_map(|(n, _)| n.parse().ok())
                .collect(),
        }
    }
}

fn parse_table<R: FromStr + Ord>(raw: BTreeMap<String, StoredActions>) -> BTreeMap<R, BTreeSet<Action>> {
    raw.into_iter()
        .filter_map(|(name, actions)| Some((name.parse::<R>().ok()?, actions.granted())))
        .collect()
}

fn render_table<R: fmt::Display>(table: BTreeMap<R, BTreeSet<Action>>) -> BTreeMap<String, StoredActions> {
    table
        .into_iter()
        .map(|(resource, actions)| {
            let names = actions.into_iter().map(|a| a.as_str().to_string()).collect();
            (resource.to_string(), StoredActions::List(names))
        })
        .collect()
}

impl From<StoredPolicy> for PermissionPolicy {
    fn from(stored: StoredPolicy) -> Self {
        Self {
            permissions: parse_table(stored.permissions),
            app_permissions: parse_table(stored.app_permissions),
            global_access: stored.global_access,
        }
    }
}

impl From<PermissionPolicy> for StoredPolicy {
    fn from(policy: PermissionPolicy) -> Self {
        Self {
            permissions: render_table(policy.permissions),
            app_permissions: render_table(policy.app_permissions),
            global_access: policy.global_access,
        }
    }
}
