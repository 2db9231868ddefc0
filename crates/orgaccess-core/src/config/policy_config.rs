use serde::{Deserialize, Serialize};

use crate::constants;

/// Access decision settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// When true, a role flagged `global_access` in *any* organisation puts
    /// its holders in every organisation's global-access set. Default: false
    /// (the flag only counts for roles of the queried organisation).
    pub cross_organisation_global_roles: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            cross_organisation_global_roles: constants::DEFAULT_CROSS_ORGANISATION_GLOBAL_ROLES,
        }
    }
}
