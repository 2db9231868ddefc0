//! Members holding global access in an organisation.

use std::collections::HashSet;

use tracing::debug;

use orgaccess_core::constants::GLOBAL_ACCESS_ROLE_NAMES;
use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{OrganisationId, OrganisationMember, RoleId, UserId};
use orgaccess_core::traits::RoleFilter;

use crate::evaluator::PolicyEvaluator;

impl PolicyEvaluator<'_> {
    /// Active members of `organisation` whose role carries global access,
    /// plus the requester's own membership.
    ///
    /// Active membership is the only gate. Each user appears at most once.
    pub fn resolve_global_access_members(
        &self,
        requester: &UserId,
        organisation: &OrganisationId,
    ) -> AccessResult<Vec<OrganisationMember>> {
        let own = self.require_membership(requester, organisation)?;
        let roles = self.global_access_roles(organisation)?;

        let mut seen: HashSet<UserId> = HashSet::new();
        let mut members = Vec::new();
        for member in self.store.list_active_members(organisation)? {
            if roles.contains(&member.role_id) && seen.insert(member.user_id.clone()) {
                members.push(member);
            }
        }
        if seen.insert(own.user_id.clone()) {
            members.push(own);
        }

        debug!(
            organisation = %organisation,
            roles = roles.len(),
            members = members.len(),
            "resolved global access members"
        );
        Ok(members)
    }

    /// Roles of `organisation` named owner or admin, together with every role
    /// flagged `global_access`. The flag only counts inside `organisation`
    /// unless `cross_organisation_global_roles` is set.
    pub fn global_access_roles(&self, organisation: &OrganisationId) -> AccessResult<HashSet<RoleId>> {
        let named = self
            .store
            .find_roles(&RoleFilter::in_organisation(organisation).named(GLOBAL_ACCESS_ROLE_NAMES))?;

        let flag_scope = if self.config.cross_organisation_global_roles {
            RoleFilter::all()
        } else {
            RoleFilter::in_organisation(organisation)
        };
        let flagged = self.store.find_roles(&flag_scope.with_global_access(true))?;

        Ok(named.into_iter().chain(flagged).map(|role| role.id).collect())
    }
}
