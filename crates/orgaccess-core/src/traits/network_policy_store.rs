use crate::errors::AccessResult;
use crate::models::{NetworkAccessPolicy, OrganisationId};

pub trait INetworkPolicyStore: Send + Sync {
    /// Every policy scoped to the organisation.
    fn list_network_policies(&self, organisation: &OrganisationId) -> AccessResult<Vec<NetworkAccessPolicy>>;
}
