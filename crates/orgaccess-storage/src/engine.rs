//! StorageEngine: owns the ConnectionPool and implements the membership, role,
//! organisation and network policy stores, plus the onboarding writes that
//! populate them.

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use tracing::{debug, info};

use orgaccess_core::config::StorageConfig;
use orgaccess_core::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_READ_POOL_SIZE};
use orgaccess_core::errors::{AccessError, AccessResult};
use orgaccess_core::models::{
    MemberId, NetworkAccessPolicy, Organisation, OrganisationId, OrganisationMember,
    PermissionPolicy, Role, RoleId, UserId,
};
use orgaccess_core::traits::{
    IMembershipStore, INetworkPolicyStore, IOrganisationStore, IRoleStore, RewriteSummary,
    RoleFilter,
};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{member_ops, network_policy_ops, organisation_ops, role_ops};
use crate::to_storage_err;

/// The main storage engine. Owns the connection pool and provides every
/// store trait the policy evaluator reads from.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default pool settings.
    pub fn open(path: &Path) -> AccessResult<Self> {
        let pool = ConnectionPool::open(path, DEFAULT_READ_POOL_SIZE, DEFAULT_BUSY_TIMEOUT_MS)?;
        Self::initialize(pool, true)
    }

    /// Open the database named by `config`.
    pub fn open_with_config(config: &StorageConfig) -> AccessResult<Self> {
        let pool = ConnectionPool::open(
            Path::new(&config.db_path),
            config.read_pool_size,
            config.busy_timeout_ms,
        )?;
        Self::initialize(pool, true)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> AccessResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        Self::initialize(pool, false)
    }

    /// Run migrations before handing the engine out.
    fn initialize(pool: ConnectionPool, use_read_pool: bool) -> AccessResult<Self> {
        let applied = pool.writer.with_conn(migrations::run_migrations)?;
        debug!(applied, file_backed = use_read_pool, "storage engine ready");
        Ok(Self { pool, use_read_pool })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> AccessResult<T>
    where
        F: FnOnce(&Connection) -> AccessResult<T>,
    {
        match (&self.pool.readers, self.use_read_pool) {
            (Some(readers), true) => readers.with_conn(f),
            _ => self.pool.writer.with_conn(f),
        }
    }

    // ── Onboarding writes ────────────────────────────────────────────────

    /// Create and persist a new organisation.
    pub fn create_organisation(&self, name: &str) -> AccessResult<Organisation> {
        let organisation = Organisation {
            id: OrganisationId::new(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.insert_organisation(&organisation)?;
        Ok(organisation)
    }

    pub fn insert_organisation(&self, organisation: &Organisation) -> AccessResult<()> {
        self.pool
            .writer
            .with_conn(|conn| organisation_ops::insert_organisation(conn, organisation))
    }

    /// Create a role in `organisation`.
    pub fn create_role(
        &self,
        organisation: &OrganisationId,
        name: &str,
        permissions: PermissionPolicy,
        is_default: bool,
    ) -> AccessResult<Role> {
        let role = Role {
            id: RoleId::new(),
            organisation_id: organisation.clone(),
            name: name.to_string(),
            description: None,
            color: None,
            permissions,
            is_default,
            created_at: Utc::now(),
        };
        self.insert_role(&role)?;
        Ok(role)
    }

    pub fn insert_role(&self, role: &Role) -> AccessResult<()> {
        self.pool.writer.with_conn(|conn| role_ops::insert_role(conn, role))
    }

    /// Add `user` to `organisation` holding `role`.
    ///
    /// The role must belong to the same organisation. A user already active
    /// in the organisation is rejected by the store's uniqueness constraint.
    pub fn add_member(
        &self,
        organisation: &OrganisationId,
        user: &UserId,
        role: &RoleId,
    ) -> AccessResult<OrganisationMember> {
        self.pool.writer.with_conn(|conn| {
            match role_ops::get_role(conn, role)? {
                Some(r) if &r.organisation_id == organisation => {}
                _ => {
                    return Err(AccessError::NotFound {
                        kind: "role",
                        id: role.to_string(),
                    })
                }
            }
            let member = OrganisationMember {
                id: MemberId::new(),
                organisation_id: organisation.clone(),
                user_id: user.clone(),
                role_id: role.clone(),
                created_at: Utc::now(),
                deleted_at: None,
            };
            member_ops::insert_member(conn, &member)?;
            info!(organisation = %organisation, user = %user, role = %role, "member added");
            Ok(member)
        })
    }

    /// Get a membership by ID, soft-deleted or not.
    pub fn get_member(&self, id: &MemberId) -> AccessResult<Option<OrganisationMember>> {
        self.with_reader(|conn| member_ops::get_member(conn, id))
    }

    /// Soft-delete `user`'s active membership in `organisation`.
    pub fn remove_member(&self, organisation: &OrganisationId, user: &UserId) -> AccessResult<()> {
        self.pool.writer.with_conn(|conn| {
            let member = member_ops::get_active_membership(conn, user, organisation)?
                .ok_or_else(|| AccessError::NotAMember {
                    user: user.to_string(),
                    organisation: organisation.to_string(),
                })?;
            member_ops::soft_delete_member(conn, &member.id, Utc::now())?;
            info!(organisation = %organisation, user = %user, "member removed");
            Ok(())
        })
    }

    /// Move `user`'s active membership in `organisation` to another role of
    /// the same organisation.
    pub fn change_member_role(
        &self,
        organisation: &OrganisationId,
        user: &UserId,
        role: &RoleId,
    ) -> AccessResult<()> {
        self.pool.writer.with_conn(|conn| {
            let member = member_ops::get_active_membership(conn, user, organisation)?
                .ok_or_else(|| AccessError::NotAMember {
                    user: user.to_string(),
                    organisation: organisation.to_string(),
                })?;
            match role_ops::get_role(conn, role)? {
                Some(r) if &r.organisation_id == organisation => {}
                _ => {
                    return Err(AccessError::NotFound {
                        kind: "role",
                        id: role.to_string(),
                    })
                }
            }
            member_ops::update_member_role(conn, &member.id, role)?;
            info!(organisation = %organisation, user = %user, role = %role, "member role changed");
            Ok(())
        })
    }

    pub fn insert_network_policy(&self, policy: &NetworkAccessPolicy) -> AccessResult<()> {
        self.pool
            .writer
            .with_conn(|conn| network_policy_ops::insert_policy(conn, policy))
    }
}

impl IMembershipStore for StorageEngine {
    fn get_active_membership(
        &self,
        user: &UserId,
        organisation: &OrganisationId,
    ) -> AccessResult<Option<OrganisationMember>> {
        self.with_reader(|conn| member_ops::get_active_membership(conn, user, organisation))
    }

    fn list_active_members(&self, organisation: &OrganisationId) -> AccessResult<Vec<OrganisationMember>> {
        self.with_reader(|conn| member_ops::list_active_members(conn, organisation))
    }
}

impl IRoleStore for StorageEngine {
    fn get_role(&self, id: &RoleId) -> AccessResult<Option<Role>> {
        self.with_reader(|conn| role_ops::get_role(conn, id))
    }

    fn find_roles(&self, filter: &RoleFilter) -> AccessResult<Vec<Role>> {
        self.with_reader(|conn| role_ops::find_roles(conn, filter))
    }

    fn rewrite_role_permissions(
        &self,
        rewrite: &dyn Fn(&str) -> Option<PermissionPolicy>,
    ) -> AccessResult<RewriteSummary> {
        self.pool.writer.with_conn(|conn| {
            // IMMEDIATE: the write lock is held from the first read to commit.
            let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
                .map_err(|e| to_storage_err(format!("begin role rewrite: {e}")))?;

            let roles = role_ops::list_role_names(&tx)?;
            let mut summary = RewriteSummary {
                examined: roles.len(),
                updated: 0,
            };
            for (id, name) in &roles {
                if let Some(policy) = rewrite(name) {
                    role_ops::update_role_permissions(&tx, id, &policy)?;
                    summary.updated += 1;
                }
            }

            tx.commit()
                .map_err(|e| to_storage_err(format!("commit role rewrite: {e}")))?;
            debug!(examined = summary.examined, updated = summary.updated, "role rewrite committed");
            Ok(summary)
        })
    }
}

impl IOrganisationStore for StorageEngine {
    fn get_organisation(&self, id: &OrganisationId) -> AccessResult<Option<Organisation>> {
        self.with_reader(|conn| organisation_ops::get_organisation(conn, id))
    }
}

impl INetworkPolicyStore for StorageEngine {
    fn list_network_policies(&self, organisation: &OrganisationId) -> AccessResult<Vec<NetworkAccessPolicy>> {
        self.with_reader(|conn| network_policy_ops::list_policies(conn, organisation))
    }
}
