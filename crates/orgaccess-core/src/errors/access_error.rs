//! Top-level error type for access-control decisions.

use super::error_code::{self, AccessErrorCode};
use super::{ConfigError, StorageError};

/// Every failure an access-control operation can surface.
///
/// `NotAMember`, `PermissionDenied` and `NotFound` are terminal denials for
/// the calling request and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// The principal has no active membership in the target organisation.
    #[error("user {user} is not a member of organisation {organisation}")]
    NotAMember { user: String, organisation: String },

    /// The membership exists but its role lacks the required permission.
    #[error("user {user} lacks {action} on {resource} in organisation {organisation}")]
    PermissionDenied {
        user: String,
        organisation: String,
        action: String,
        resource: String,
    },

    /// A referenced organisation, role or membership does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The role permission migration failed and was rolled back.
    #[error("role permission migration failed and was rolled back: {reason}")]
    MigrationFailed { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AccessError {
    /// Whether this error is a user-visible access denial rather than an
    /// infrastructure failure.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::NotAMember { .. } | Self::PermissionDenied { .. } | Self::NotFound { .. }
        )
    }
}

impl AccessErrorCode for AccessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAMember { .. } => error_code::NOT_A_MEMBER,
            Self::PermissionDenied { .. } => error_code::PERMISSION_DENIED,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
