use orgaccess_core::errors::*;

#[test]
fn not_a_member_carries_user_and_organisation() {
    let err = AccessError::NotAMember {
        user: "user-1".into(),
        organisation: "org-9".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("user-1"));
    assert!(msg.contains("org-9"));
    assert_eq!(err.error_code(), "NOT_A_MEMBER");
    assert!(err.is_denial());
}

#[test]
fn permission_denied_carries_action_and_resource() {
    let err = AccessError::PermissionDenied {
        user: "user-1".into(),
        organisation: "org-9".into(),
        action: "read".into(),
        resource: "Roles".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("read"));
    assert!(msg.contains("Roles"));
    assert_eq!(err.coded_string(), format!("[PERMISSION_DENIED] {msg}"));
}

#[test]
fn not_found_names_the_kind() {
    let err = AccessError::NotFound {
        kind: "organisation",
        id: "org-404".into(),
    };
    assert_eq!(err.to_string(), "organisation not found: org-404");
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[test]
fn migration_failure_is_not_a_denial() {
    let err = AccessError::MigrationFailed {
        reason: "disk I/O error".into(),
    };
    assert!(!err.is_denial());
    assert_eq!(err.error_code(), "MIGRATION_FAILED");
}

// --- From impls ---

#[test]
fn storage_error_converts_to_access_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: AccessError = storage_err.into();
    assert!(matches!(err, AccessError::Storage(_)));
    assert_eq!(err.error_code(), "STORAGE_ERROR");
}

#[test]
fn corrupt_record_maps_to_db_corrupt() {
    let err: AccessError = StorageError::CorruptRecord {
        table: "roles".into(),
        id: "r1".into(),
        reason: "bad json".into(),
    }
    .into();
    assert_eq!(err.error_code(), "DB_CORRUPT");
}

#[test]
fn config_error_converts_to_access_error() {
    let err: AccessError = ConfigError::ValidationFailed {
        field: "storage.read_pool_size".into(),
        message: "must be between 1 and 8".into(),
    }
    .into();
    assert!(matches!(err, AccessError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn serialization_error_converts_to_access_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: AccessError = json_err.into();
    assert!(matches!(err, AccessError::Serialization(_)));
}
