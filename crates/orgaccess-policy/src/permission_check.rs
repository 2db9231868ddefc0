//! Permission checks: membership, then role, then the role's capability table.

use tracing::{debug, warn};

use orgaccess_core::errors::{AccessError, AccessResult};
use orgaccess_core::models::{
    Action, AppResourceType, Decision, OrganisationId, PermissionQuery, ResourceType, UserId,
};

use crate::evaluator::PolicyEvaluator;

impl PolicyEvaluator<'_> {
    /// Whether `principal` may perform `action` on `resource` in `organisation`.
    ///
    /// Fails with `NotAMember` when the principal has no active membership and
    /// `NotFound` when the membership references a missing role. An action
    /// absent from the role's table is `Ok(false)`, never an error.
    /// `global_access` is not consulted.
    pub fn has_permission(
        &self,
        principal: &UserId,
        action: Action,
        resource: ResourceType,
        organisation: &OrganisationId,
    ) -> AccessResult<bool> {
        let (_, role) = self.membership_role(principal, organisation)?;
        let allowed = role.permissions.allows(resource, action);
        if allowed {
            debug!(user = %principal, organisation = %organisation, %action, %resource, role = %role.name, "permission granted");
        } else {
            warn!(user = %principal, organisation = %organisation, %action, %resource, role = %role.name, "permission check failed");
        }
        Ok(allowed)
    }

    /// App-level counterpart of [`has_permission`](Self::has_permission).
    pub fn has_app_permission(
        &self,
        principal: &UserId,
        action: Action,
        resource: AppResourceType,
        organisation: &OrganisationId,
    ) -> AccessResult<bool> {
        let (_, role) = self.membership_role(principal, organisation)?;
        let allowed = role.permissions.allows_app(resource, action);
        if !allowed {
            warn!(user = %principal, organisation = %organisation, %action, %resource, role = %role.name, "app permission check failed");
        }
        Ok(allowed)
    }

    pub fn evaluate(&self, query: &PermissionQuery) -> AccessResult<Decision> {
        self.has_permission(&query.principal, query.action, query.resource, &query.organisation)
            .map(Decision::from)
    }

    /// Like [`has_permission`](Self::has_permission), with a denial as `PermissionDenied`.
    pub fn require_permission(
        &self,
        principal: &UserId,
        action: Action,
        resource: ResourceType,
        organisation: &OrganisationId,
    ) -> AccessResult<()> {
        if self.has_permission(principal, action, resource, organisation)? {
            Ok(())
        } else {
            Err(AccessError::PermissionDenied {
                user: principal.to_string(),
                organisation: organisation.to_string(),
                action: action.to_string(),
                resource: resource.to_string(),
            })
        }
    }

    pub fn is_member(&self, principal: &UserId, organisation: &OrganisationId) -> AccessResult<bool> {
        self.store.is_active_member(principal, organisation)
    }
}
