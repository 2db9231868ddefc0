//! The permission rewrite is all-or-nothing.

use orgaccess_core::models::{Action, PermissionPolicy, ResourceType};
use orgaccess_core::traits::IRoleStore;
use orgaccess_storage::StorageEngine;

fn grant_read_roles() -> PermissionPolicy {
    PermissionPolicy::new().grant(ResourceType::Roles, &[Action::Read])
}

#[test]
fn rewrite_reports_examined_and_updated() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let org = storage.create_organisation("Acme").unwrap();
    let owner = storage.create_role(&org.id, "Owner", PermissionPolicy::new(), true).unwrap();
    storage.create_role(&org.id, "Tester", PermissionPolicy::new(), false).unwrap();

    let summary = storage
        .rewrite_role_permissions(&|name| (name == "Owner").then(grant_read_roles))
        .unwrap();
    assert_eq!(summary.examined, 2);
    assert_eq!(summary.updated, 1);

    let owner = storage.get_role(&owner.id).unwrap().unwrap();
    assert!(owner.permissions.allows(ResourceType::Roles, Action::Read));
}

#[test]
fn failed_update_rolls_back_every_change() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let org = storage.create_organisation("Acme").unwrap();
    let first = storage.create_role(&org.id, "Owner", PermissionPolicy::new(), true).unwrap();
    storage.create_role(&org.id, "Broken", PermissionPolicy::new(), false).unwrap();

    storage
        .pool()
        .writer
        .with_conn(|conn| {
            conn.execute_batch(
                "CREATE TRIGGER reject_broken BEFORE UPDATE ON roles
                 WHEN NEW.name = 'Broken'
                 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();
            Ok(())
        })
        .unwrap();

    let result = storage.rewrite_role_permissions(&|_| Some(grant_read_roles()));
    assert!(result.is_err());

    let first = storage.get_role(&first.id).unwrap().unwrap();
    assert!(!first.permissions.allows(ResourceType::Roles, Action::Read));
}

fn set_raw_permissions(storage: &StorageEngine, id: &str, json: &str) {
    storage
        .pool()
        .writer
        .with_conn(|conn| {
            conn.execute("UPDATE roles SET permissions = ?2 WHERE id = ?1", [id, json])
                .unwrap();
            Ok(())
        })
        .unwrap();
}

#[test]
fn undecodable_permissions_are_overwritten() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let org = storage.create_organisation("Acme").unwrap();
    let owner = storage.create_role(&org.id, "Owner", PermissionPolicy::new(), true).unwrap();
    set_raw_permissions(
        &storage,
        owner.id.as_str(),
        r#"{"permissions":{"Apps":{"read":true,"scopes":["x"]}},"global_access":null}"#,
    );

    let summary = storage
        .rewrite_role_permissions(&|_| Some(grant_read_roles()))
        .unwrap();
    assert_eq!(summary.updated, 1);
    assert_eq!(storage.get_role(&owner.id).unwrap().unwrap().permissions, grant_read_roles());
}

#[test]
fn skipped_roles_keep_their_stored_json() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let org = storage.create_organisation("Acme").unwrap();
    let owner = storage.create_role(&org.id, "Owner", PermissionPolicy::new(), true).unwrap();
    let custom = storage.create_role(&org.id, "Legacy", PermissionPolicy::new(), false).unwrap();
    set_raw_permissions(&storage, custom.id.as_str(), "[");

    let summary = storage
        .rewrite_role_permissions(&|name| (name == "Owner").then(grant_read_roles))
        .unwrap();
    assert_eq!(summary.examined, 2);
    assert_eq!(summary.updated, 1);
    assert!(storage
        .get_role(&owner.id)
        .unwrap()
        .unwrap()
        .permissions
        .allows(ResourceType::Roles, Action::Read));
    assert!(storage.get_role(&custom.id).is_err());
}
