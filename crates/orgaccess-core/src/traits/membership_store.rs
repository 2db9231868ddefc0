use crate::errors::AccessResult;
use crate::models::{OrganisationId, OrganisationMember, UserId};

/// Read access to organisation memberships. Only active (not soft-deleted)
/// records are ever returned.
pub trait IMembershipStore: Send + Sync {
    fn is_active_member(&self, user: &UserId, organisation: &OrganisationId) -> AccessResult<bool> {
        Ok(self.get_active_membership(user, organisation)?.is_some())
    }

    fn get_active_membership(
        &self,
        user: &UserId,
        organisation: &OrganisationId,
    ) -> AccessResult<Option<OrganisationMember>>;

    fn list_active_members(&self, organisation: &OrganisationId) -> AccessResult<Vec<OrganisationMember>>;
}
