//! Domain models: organisations, roles, memberships, permission tables,
//! network access policies and permission queries.

pub mod ids;
pub mod member;
pub mod network_policy;
pub mod organisation;
pub mod permissions;
pub mod query;
pub mod role;

pub use ids::{MemberId, OrganisationId, PolicyId, RoleId, UserId};
pub use member::OrganisationMember;
pub use network_policy::{is_client_ip_allowed, AllowedNetwork, NetworkAccessPolicy};
pub use organisation::Organisation;
pub use permissions::{Action, AppResourceType, PermissionPolicy, ResourceType};
pub use query::{Decision, PermissionQuery};
pub use role::{DefaultRole, Role, RoleKind};
