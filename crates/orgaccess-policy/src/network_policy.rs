//! Gated access to an organisation's network access policies.

use std::net::IpAddr;

use tracing::debug;

use orgaccess_core::errors::AccessResult;
use orgaccess_core::models::{
    is_client_ip_allowed, Action, NetworkAccessPolicy, OrganisationId, ResourceType, UserId,
};

use crate::evaluator::PolicyEvaluator;

impl PolicyEvaluator<'_> {
    /// Every policy scoped to `organisation`.
    ///
    /// Checks run in order: active membership (`NotAMember`), organisation
    /// exists (`NotFound`), `read` on `NetworkAccessPolicies` (`PermissionDenied`).
    pub fn list_network_access_policies(
        &self,
        requester: &UserId,
        organisation: &OrganisationId,
    ) -> AccessResult<Vec<NetworkAccessPolicy>> {
        self.require_membership(requester, organisation)?;
        self.require_organisation(organisation)?;
        self.require_permission(requester, Action::Read, ResourceType::NetworkAccessPolicies, organisation)?;

        let policies = self.store.list_network_policies(organisation)?;
        debug!(organisation = %organisation, count = policies.len(), "listed network access policies");
        Ok(policies)
    }

    /// Whether `client_ip` is covered by the organisation's global policies,
    /// under the same gate as [`list_network_access_policies`](Self::list_network_access_policies).
    pub fn client_ip_allowed(
        &self,
        requester: &UserId,
        organisation: &OrganisationId,
        client_ip: IpAddr,
    ) -> AccessResult<bool> {
        let policies = self.list_network_access_policies(requester, organisation)?;
        Ok(is_client_ip_allowed(&policies, client_ip))
    }
}
