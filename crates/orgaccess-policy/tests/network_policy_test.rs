mod common;

use chrono::Utc;
use common::Seeded;
use orgaccess_core::errors::AccessError;
use orgaccess_core::models::{NetworkAccessPolicy, OrganisationId, PolicyId};

fn add_policy(seeded: &Seeded, org: &OrganisationId, name: &str, allowed_ips: &str, is_global: bool) {
    seeded
        .storage
        .insert_network_policy(&NetworkAccessPolicy {
            id: PolicyId::new(),
            organisation_id: org.clone(),
            name: name.into(),
            allowed_ips: allowed_ips.into(),
            is_global,
            created_at: Utc::now(),
        })
        .unwrap();
}

#[test]
fn reader_lists_every_policy_of_the_organisation() {
    let seeded = Seeded::new();
    add_policy(&seeded, &seeded.org, "office", "203.0.113.0/24", true);
    add_policy(&seeded, &seeded.org, "ci", "198.51.100.7", false);
    let other = common::seed_organisation(&seeded.storage, "Other");
    add_policy(&seeded, &other, "elsewhere", "10.0.0.0/8", true);
    let dev = seeded.join("dev", "Developer");

    let policies = seeded
        .evaluator()
        .list_network_access_policies(&dev, &seeded.org)
        .unwrap();
    let mut names: Vec<_> = policies.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["ci", "office"]);
}

#[test]
fn listing_requires_read_permission() {
    let seeded = Seeded::new();
    add_policy(&seeded, &seeded.org, "office", "203.0.113.0/24", true);
    let service = seeded.join("svc", "Service");

    let err = seeded
        .evaluator()
        .list_network_access_policies(&service, &seeded.org)
        .unwrap_err();
    match err {
        AccessError::PermissionDenied { action, resource, .. } => {
            assert_eq!(action, "read");
            assert_eq!(resource, "NetworkAccessPolicies");
        }
        other => panic!("expected PermissionDenied, got {other:?}"),
    }
}

#[test]
fn client_ip_is_checked_against_global_policies_only() {
    let seeded = Seeded::new();
    add_policy(&seeded, &seeded.org, "office", "203.0.113.0/24, 2001:db8::/32", true);
    add_policy(&seeded, &seeded.org, "ci", "198.51.100.7", false);
    let admin = seeded.join("admin", "Admin");
    let evaluator = seeded.evaluator();

    assert!(evaluator
        .client_ip_allowed(&admin, &seeded.org, "203.0.113.42".parse().unwrap())
        .unwrap());
    assert!(evaluator
        .client_ip_allowed(&admin, &seeded.org, "2001:db8::1".parse().unwrap())
        .unwrap());
    assert!(!evaluator
        .client_ip_allowed(&admin, &seeded.org, "198.51.100.7".parse().unwrap())
        .unwrap());
}
