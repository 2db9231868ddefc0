//! Reset every default-named role to the default permission table.

use tracing::{error, info};

use orgaccess_core::errors::{AccessError, AccessResult};
use orgaccess_core::traits::IRoleStore;

use crate::default_roles::default_permissions_for;

/// Outcome of [`migrate_role_permissions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Roles read inside the migration transaction.
    pub examined: usize,
    /// Roles whose permissions were overwritten.
    pub updated: usize,
}

/// Overwrite the permissions of every role whose capitalized name is a
/// default role. Custom roles are left as they are.
///
/// All-or-nothing: any failure rolls the whole migration back and is
/// reported as `MigrationFailed`. Running it again yields the same state.
pub fn migrate_role_permissions<S>(store: &S) -> AccessResult<MigrationReport>
where
    S: IRoleStore + ?Sized,
{
    let summary = store
        .rewrite_role_permissions(&default_permissions_for)
        .map_err(|e| {
            error!(error = %e, "role permission migration rolled back");
            AccessError::MigrationFailed { reason: e.to_string() }
        })?;

    let report = MigrationReport {
        examined: summary.examined,
        updated: summary.updated,
    };
    info!(
        examined = report.examined,
        updated = report.updated,
        "permissions updated for default roles"
    );
    Ok(report)
}
