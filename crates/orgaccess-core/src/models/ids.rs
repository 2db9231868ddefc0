//! String-backed identifiers.
//!
//! # Examples
//!
//! ```
//! use orgaccess_core::models::{OrganisationId, UserId};
//!
//! let org = OrganisationId::new();
//! assert!(!org.0.is_empty());
//!
//! let user = UserId::from("user-1");
//! assert_eq!(user.to_string(), "user-1");
//! ```

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier with a random UUID v4.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Tenant boundary identifier.
    OrganisationId
);
string_id!(
    /// Authenticated principal identifier.
    UserId
);
string_id!(
    /// Role record identifier.
    RoleId
);
string_id!(
    /// Organisation membership record identifier.
    MemberId
);
string_id!(
    /// Network access policy identifier.
    PolicyId
);
