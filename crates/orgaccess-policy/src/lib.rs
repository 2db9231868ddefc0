//! # orgaccess-policy
//!
//! Access decisions over the `orgaccess-core` store traits.
//!
//! [`PolicyEvaluator`] answers permission checks, ranks roles, resolves the
//! global-access members of an organisation and gates network policy
//! listing. [`migrate_role_permissions`] resets default roles to the
//! [`default_roles`] table.

pub mod default_roles;
pub mod evaluator;
pub mod global_access;
pub mod migration;
pub mod network_policy;
pub mod permission_check;
pub mod role_ranking;
pub mod tracing_setup;

pub use evaluator::PolicyEvaluator;
pub use migration::{migrate_role_permissions, MigrationReport};
pub use role_ranking::sort_roles;
