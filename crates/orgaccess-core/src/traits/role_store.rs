use crate::errors::{AccessError, AccessResult};
use crate::models::{OrganisationId, OrganisationMember, PermissionPolicy, Role, RoleId};

/// Selection over stored roles. Every populated field must match; an empty
/// filter selects every role in every organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    pub organisation: Option<OrganisationId>,
    /// Name alternatives, compared ASCII case-insensitively. Empty means any name.
    pub names: Vec<String>,
    pub global_access: Option<bool>,
}

impl RoleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_organisation(organisation: &OrganisationId) -> Self {
        Self {
            organisation: Some(organisation.clone()),
            ..Self::default()
        }
    }

    pub fn named<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_global_access(mut self, global_access: bool) -> Self {
        self.global_access = Some(global_access);
        self
    }
}

/// Counts reported by [`IRoleStore::rewrite_role_permissions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub examined: usize,
    pub updated: usize,
}

/// Role records and the one multi-row mutation access control performs.
pub trait IRoleStore: Send + Sync {
    fn get_role(&self, id: &RoleId) -> AccessResult<Option<Role>>;

    /// The role a membership references. A dangling reference is `NotFound`.
    fn get_role_for_member(&self, member: &OrganisationMember) -> AccessResult<Role> {
        self.get_role(&member.role_id)?.ok_or_else(|| AccessError::NotFound {
            kind: "role",
            id: member.role_id.to_string(),
        })
    }

    fn find_roles(&self, filter: &RoleFilter) -> AccessResult<Vec<Role>>;

    /// Offer every stored role's name to `rewrite`; each `Some` replaces that
    /// role's permission policy. The stored policy is never decoded, so a
    /// role holding an older JSON shape can still be overwritten.
    ///
    /// The read and every write happen in one transaction: either every
    /// replacement is committed or none is.
    fn rewrite_role_permissions(
        &self,
        rewrite: &dyn Fn(&str) -> Option<PermissionPolicy>,
    ) -> AccessResult<RewriteSummary>;
}
