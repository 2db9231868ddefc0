//! Property tests: ranking determinism, implicit deny, migration idempotence,
//! requester always in the global-access set.

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;

use orgaccess_core::config::PolicyConfig;
use orgaccess_core::models::{
    Action, DefaultRole, OrganisationId, PermissionPolicy, ResourceType, Role, RoleId, UserId,
};
use orgaccess_core::traits::{IRoleStore, RoleFilter};
use orgaccess_policy::default_roles::default_permissions;
use orgaccess_policy::{migrate_role_permissions, sort_roles, PolicyEvaluator};
use orgaccess_storage::StorageEngine;

const ROLE_NAMES: [&str; 12] = [
    "Owner", "owner", "OWNER", "Admin", "aDmin", "Manager", "developer", "SERVICE", "Tester",
    "QA", "qa", "Auditor",
];

fn role_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ROLE_NAMES.to_vec())
}

fn make_role(index: usize, name: &str, is_default: bool) -> Role {
    Role {
        id: RoleId::from(format!("role-{index:03}")),
        organisation_id: OrganisationId::from("org"),
        name: name.to_string(),
        description: None,
        color: None,
        permissions: PermissionPolicy::new(),
        is_default,
        created_at: Utc::now(),
    }
}

fn grant_pairs() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..ResourceType::ALL.len(), 0..Action::ALL.len()), 0..12)
}

/// One organisation with the default roles seeded; returns the engine and org.
fn seeded_store() -> (StorageEngine, OrganisationId) {
    let storage = StorageEngine::open_in_memory().unwrap();
    let org = storage.create_organisation("Acme").unwrap();
    for role in DefaultRole::ALL {
        storage
            .create_role(&org.id, role.name(), default_permissions(role), true)
            .unwrap();
    }
    storage
        .create_role(&org.id, "Tester", PermissionPolicy::new(), false)
        .unwrap();
    (storage, org.id)
}

fn role_id(storage: &StorageEngine, org: &OrganisationId, name: &str) -> RoleId {
    storage
        .find_roles(&RoleFilter::in_organisation(org).named([name]))
        .unwrap()
        .remove(0)
        .id
}

proptest! {
    #[test]
    fn prop_ranking_is_idempotent_and_input_order_independent(
        specs in prop::collection::vec((role_name(), any::<bool>()), 0..20)
    ) {
        let roles: Vec<Role> = specs
            .iter()
            .enumerate()
            .map(|(i, (name, is_default))| make_role(i, name, *is_default))
            .collect();

        let once = sort_roles(roles.clone());
        let twice = sort_roles(once.clone());
        prop_assert_eq!(&once, &twice);

        let mut reversed = roles;
        reversed.reverse();
        prop_assert_eq!(&sort_roles(reversed), &once);

        // Defaults always precede custom roles.
        let first_custom = once.iter().position(|r| !r.is_default).unwrap_or(once.len());
        prop_assert!(once[first_custom..].iter().all(|r| !r.is_default));
    }

    #[test]
    fn prop_unset_permission_is_false_not_error(pairs in grant_pairs()) {
        let (storage, org) = seeded_store();
        let mut policy = PermissionPolicy::new();
        let mut granted = HashSet::new();
        for (r, a) in &pairs {
            let (resource, action) = (ResourceType::ALL[*r], Action::ALL[*a]);
            policy = policy.grant(resource, &[action]);
            granted.insert((resource, action));
        }
        let role = storage.create_role(&org, "Custom", policy, false).unwrap();
        let user = UserId::from("subject");
        storage.add_member(&org, &user, &role.id).unwrap();

        let evaluator = PolicyEvaluator::new(&storage, PolicyConfig::default());
        for resource in ResourceType::ALL {
            for action in Action::ALL {
                let allowed = evaluator.has_permission(&user, action, resource, &org).unwrap();
                prop_assert_eq!(allowed, granted.contains(&(resource, action)));
            }
        }
    }

    #[test]
    fn prop_migration_is_idempotent(names in prop::collection::vec(role_name(), 1..10)) {
        let storage = StorageEngine::open_in_memory().unwrap();
        let org = storage.create_organisation("Acme").unwrap();
        for name in &names {
            storage
                .create_role(&org.id, name, PermissionPolicy::new().grant(ResourceType::Apps, &[Action::Read]), false)
                .unwrap();
        }
        let custom_before: Vec<Role> = storage
            .find_roles(&RoleFilter::in_organisation(&org.id))
            .unwrap()
            .into_iter()
            .filter(|r| DefaultRole::from_name(&r.name).is_none())
            .collect();

        migrate_role_permissions(&storage).unwrap();
        let first = storage.find_roles(&RoleFilter::all()).unwrap();
        migrate_role_permissions(&storage).unwrap();
        let second = storage.find_roles(&RoleFilter::all()).unwrap();
        prop_assert_eq!(&first, &second);

        for role in &first {
            match DefaultRole::from_name(&role.name) {
                Some(default) => prop_assert_eq!(&role.permissions, &default_permissions(default)),
                None => prop_assert!(custom_before.contains(role)),
            }
        }
    }

    #[test]
    fn prop_requester_always_included(
        requester_role in prop::sample::select(vec!["Owner", "Admin", "Manager", "Developer", "Service", "Tester"]),
        others in prop::collection::vec(
            prop::sample::select(vec!["Owner", "Admin", "Manager", "Developer", "Service", "Tester"]),
            0..6,
        ),
    ) {
        let (storage, org) = seeded_store();
        let requester = UserId::from("requester");
        storage.add_member(&org, &requester, &role_id(&storage, &org, requester_role)).unwrap();
        for (i, name) in others.iter().enumerate() {
            let user = UserId::from(format!("user-{i}"));
            storage.add_member(&org, &user, &role_id(&storage, &org, name)).unwrap();
        }

        let evaluator = PolicyEvaluator::new(&storage, PolicyConfig::default());
        let members = evaluator.resolve_global_access_members(&requester, &org).unwrap();

        prop_assert!(members.iter().any(|m| m.user_id == requester));
        let unique: HashSet<_> = members.iter().map(|m| m.user_id.clone()).collect();
        prop_assert_eq!(unique.len(), members.len());

        let expected_others = others
            .iter()
            .filter(|name| matches!(**name, "Owner" | "Admin"))
            .count();
        prop_assert_eq!(members.len() - 1, expected_others);
    }
}
