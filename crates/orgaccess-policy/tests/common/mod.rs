#![allow(dead_code)]

use orgaccess_core::config::PolicyConfig;
use orgaccess_core::models::{DefaultRole, OrganisationId, PermissionPolicy, Role, UserId};
use orgaccess_core::traits::{IRoleStore, RoleFilter};
use orgaccess_policy::default_roles::default_permissions;
use orgaccess_policy::PolicyEvaluator;
use orgaccess_storage::StorageEngine;

/// An in-memory store holding one organisation seeded with the default roles.
pub struct Seeded {
    pub storage: StorageEngine,
    pub org: OrganisationId,
}

impl Seeded {
    pub fn new() -> Self {
        let storage = StorageEngine::open_in_memory().expect("in-memory storage");
        let org = seed_organisation(&storage, "Acme");
        Self { storage, org }
    }

    pub fn evaluator(&self) -> PolicyEvaluator<'_> {
        PolicyEvaluator::new(&self.storage, PolicyConfig::default())
    }

    pub fn evaluator_with(&self, config: PolicyConfig) -> PolicyEvaluator<'_> {
        PolicyEvaluator::new(&self.storage, config)
    }

    /// The role of this organisation called `name` (case-insensitive).
    pub fn role(&self, name: &str) -> Role {
        self.storage
            .find_roles(&RoleFilter::in_organisation(&self.org).named([name]))
            .expect("find roles")
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no role named {name}"))
    }

    pub fn custom_role(&self, name: &str, permissions: PermissionPolicy) -> Role {
        self.storage
            .create_role(&self.org, name, permissions, false)
            .expect("create role")
    }

    /// Add `user` holding the role called `role_name`.
    pub fn join(&self, user: &str, role_name: &str) -> UserId {
        let user = UserId::from(user);
        let role = self.role(role_name);
        self.storage
            .add_member(&self.org, &user, &role.id)
            .expect("add member");
        user
    }
}

/// Create an organisation and seed every default role with its default permissions.
pub fn seed_organisation(storage: &StorageEngine, name: &str) -> OrganisationId {
    let org = storage.create_organisation(name).expect("create organisation");
    for role in DefaultRole::ALL {
        storage
            .create_role(&org.id, role.name(), default_permissions(role), true)
            .expect("create default role");
    }
    org.id
}
