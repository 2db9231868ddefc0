//! Role listing order.
//!
//! Default roles come first, then the rank table (Owner, Admin, Manager,
//! Developer, Service, then everything else). Ties fall back to the
//! case-insensitive name and finally the id, so the order is total.

use std::cmp::Ordering;

use tracing::debug;

use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{Action, OrganisationId, ResourceType, Role, UserId};
use orgaccess_core::traits::RoleFilter;

use crate::evaluator::PolicyEvaluator;

/// Listing order between two roles.
pub fn compare_roles(a: &Role, b: &Role) -> Ordering {
    b.is_default
        .cmp(&a.is_default)
        .then_with(|| a.rank().cmp(&b.rank()))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort roles into listing order.
pub fn sort_roles(mut roles: Vec<Role>) -> Vec<Role> {
    roles.sort_by(compare_roles);
    roles
}

impl PolicyEvaluator<'_> {
    /// Roles of `organisation` in listing order.
    ///
    /// The organisation must exist and `requester` must hold `read` on `Roles`.
    pub fn rank_roles(&self, requester: &UserId, organisation: &OrganisationId) -> AccessResult<Vec<Role>> {
        self.require_organisation(organisation)?;
        self.require_permission(requester, Action::Read, ResourceType::Roles, organisation)?;

        let roles = self.store.find_roles(&RoleFilter::in_organisation(organisation))?;
        debug!(organisation = %organisation, count = roles.len(), "ranking roles");
        Ok(sort_roles(roles))
    }
}
