//! Permission table seeded into each default role.

use orgaccess_core::models::{Action, AppResourceType, DefaultRole, PermissionPolicy, ResourceType};

use Action::{Create, Delete, Read, Update};

const CRUD: [Action; 4] = Action::ALL;
const CRU: [Action; 3] = [Create, Read, Update];
const RU: [Action; 2] = [Read, Update];
const R: [Action; 1] = [Read];

/// The permission policy a default role is reset to.
pub fn default_permissions(role: DefaultRole) -> PermissionPolicy {
    match role {
        DefaultRole::Owner => PermissionPolicy::full().with_global_access(true),
        DefaultRole::Admin => admin(),
        DefaultRole::Manager => manager(),
        DefaultRole::Developer => developer(),
        DefaultRole::Service => service(),
    }
}

/// Default permissions for a stored role name, if it names a default role.
pub fn default_permissions_for(name: &str) -> Option<PermissionPolicy> {
    DefaultRole::from_name(name).map(default_permissions)
}

fn admin() -> PermissionPolicy {
    let mut policy = PermissionPolicy::new()
        .grant(ResourceType::Organisation, &RU)
        .grant(ResourceType::Billing, &RU);
    for resource in [
        ResourceType::Apps,
        ResourceType::Members,
        ResourceType::ServiceAccounts,
        ResourceType::ServiceAccountTokens,
        ResourceType::Roles,
        ResourceType::IntegrationCredentials,
        ResourceType::NetworkAccessPolicies,
    ] {
        policy = policy.grant(resource, &CRUD);
    }
    for resource in AppResourceType::ALL {
        policy = policy.grant_app(resource, &CRUD);
    }
    policy.with_global_access(true)
}

fn manager() -> PermissionPolicy {
    PermissionPolicy::new()
        .grant(ResourceType::Organisation, &R)
        .grant(ResourceType::Apps, &CRU)
        .grant(ResourceType::Members, &CRU)
        .grant(ResourceType::ServiceAccounts, &CRU)
        .grant(ResourceType::ServiceAccountTokens, &[Create, Read, Delete])
        .grant(ResourceType::Roles, &R)
        .grant(ResourceType::IntegrationCredentials, &CRU)
        .grant(ResourceType::NetworkAccessPolicies, &R)
        .grant_app(AppResourceType::Environments, &CRUD)
        .grant_app(AppResourceType::Secrets, &CRUD)
        .grant_app(AppResourceType::Logs, &R)
        .grant_app(AppResourceType::Tokens, &CRUD)
        .grant_app(AppResourceType::Members, &CRUD)
        .grant_app(AppResourceType::ServiceAccounts, &CRUD)
        .grant_app(AppResourceType::Integrations, &CRUD)
        .grant_app(AppResourceType::EncryptionMode, &RU)
}

fn developer() -> PermissionPolicy {
    PermissionPolicy::new()
        .grant(ResourceType::Organisation, &R)
        .grant(ResourceType::Apps, &R)
        .grant(ResourceType::Members, &R)
        .grant(ResourceType::ServiceAccounts, &R)
        .grant(ResourceType::Roles, &R)
        .grant(ResourceType::IntegrationCredentials, &R)
        .grant(ResourceType::NetworkAccessPolicies, &R)
        .grant_app(AppResourceType::Environments, &R)
        .grant_app(AppResourceType::Secrets, &CRUD)
        .grant_app(AppResourceType::Logs, &R)
        .grant_app(AppResourceType::Tokens, &[Create, Read])
        .grant_app(AppResourceType::Members, &R)
        .grant_app(AppResourceType::ServiceAccounts, &R)
        .grant_app(AppResourceType::Integrations, &R)
        .grant_app(AppResourceType::EncryptionMode, &R)
}

fn service() -> PermissionPolicy {
    PermissionPolicy::new()
        .grant(ResourceType::Organisation, &R)
        .grant(ResourceType::Apps, &R)
        .grant(ResourceType::Roles, &R)
        .grant_app(AppResourceType::Environments, &R)
        .grant_app(AppResourceType::Secrets, &CRUD)
        .grant_app(AppResourceType::Logs, &R)
        .grant_app(AppResourceType::Tokens, &R)
}
