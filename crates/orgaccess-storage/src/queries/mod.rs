//! Raw SQL operations: persistence and decoding only.

pub mod member_ops;
pub mod network_policy_ops;
pub mod organisation_ops;
pub mod role_ops;

use chrono::{DateTime, Utc};

use orgaccess_core::errors::AccessResult;

use crate::corrupt;

/// Decode an RFC 3339 column value.
pub(crate) fn parse_timestamp(table: &str, id: &str, value: &str) -> AccessResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| corrupt(table, id, format!("bad timestamp {value:?}: {e}")))
}
