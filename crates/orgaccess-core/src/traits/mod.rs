//! Store traits: the external collaborators access decisions are made against.

mod membership_store;
mod network_policy_store;
mod organisation_store;
mod role_store;

pub use membership_store::IMembershipStore;
pub use network_policy_store::INetworkPolicyStore;
pub use organisation_store::IOrganisationStore;
pub use role_store::{IRoleStore, RewriteSummary, RoleFilter};

/// Everything a policy evaluator reads from.
pub trait IAccessStore: IMembershipStore + IRoleStore + IOrganisationStore + INetworkPolicyStore {}

impl<T> IAccessStore for T where T: IMembershipStore + IRoleStore + IOrganisationStore + INetworkPolicyStore {}
