//! PolicyEvaluator: the entry point the calling layer holds.
//!
//! The operations themselves live in sibling modules, one per concern,
//! each adding an `impl PolicyEvaluator` block.

use orgaccess_core::config::PolicyConfig;
use orgaccess_core::errors::{AccessError, AccessResult};
use orgaccess_core::models::{OrganisationId, OrganisationMember, Role, UserId};
use orgaccess_core::traits::IAccessStore;

/// Stateless evaluator over a borrowed access store.
pub struct PolicyEvaluator<'a> {
    pub(crate) store: &'a dyn IAccessStore,
    pub(crate) config: PolicyConfig,
}

impl<'a> PolicyEvaluator<'a> {
    pub fn new(store: &'a dyn IAccessStore, config: PolicyConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// The requester's active membership, or `NotAMember`.
    pub(crate) fn require_membership(
        &self,
        principal: &UserId,
        organisation: &OrganisationId,
    ) -> AccessResult<OrganisationMember> {
        self.store
            .get_active_membership(principal, organisation)?
            .ok_or_else(|| AccessError::NotAMember {
                user: principal.to_string(),
                organisation: organisation.to_string(),
            })
    }

    /// The requester's active membership and the role it references.
    pub(crate) fn membership_role(
        &self,
        principal: &UserId,
        organisation: &OrganisationId,
    ) -> AccessResult<(OrganisationMember, Role)> {
        let member = self.require_membership(principal, organisation)?;
        let role = self.store.get_role_for_member(&member)?;
        Ok((member, role))
    }

    /// `NotFound` unless the organisation exists.
    pub(crate) fn require_organisation(&self, organisation: &OrganisationId) -> AccessResult<()> {
        match self.store.get_organisation(organisation)? {
            Some(_) => Ok(()),
            None => Err(AccessError::NotFound {
                kind: "organisation",
                id: organisation.to_string(),
            }),
        }
    }
}
