//! # orgaccess-core
//!
//! Foundation crate for organisation access control.
//! Defines the domain types, typed permission tables, errors, config,
//! constants and the store traits every other crate in the workspace
//! builds on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AccessConfig;
pub use errors::{AccessError, AccessResult};
pub use models::{
    Action, AppResourceType, Decision, NetworkAccessPolicy, Organisation, OrganisationId,
    OrganisationMember, PermissionPolicy, PermissionQuery, ResourceType, Role, RoleId, UserId,
};
