// Single source of truth for default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "orgaccess.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const MAX_READ_POOL_SIZE: usize = 8;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Policy ---
/// Role names (case-insensitive) that always carry global access.
pub const GLOBAL_ACCESS_ROLE_NAMES: [&str; 2] = ["owner", "admin"];
pub const DEFAULT_CROSS_ORGANISATION_GLOBAL_ROLES: bool = false;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "ORGACCESS_LOG";

// --- Environment overrides ---
pub const ENV_DB_PATH: &str = "ORGACCESS_DB_PATH";
pub const ENV_READ_POOL_SIZE: &str = "ORGACCESS_READ_POOL_SIZE";
pub const ENV_BUSY_TIMEOUT_MS: &str = "ORGACCESS_BUSY_TIMEOUT_MS";
pub const ENV_CROSS_ORG_GLOBAL_ROLES: &str = "ORGACCESS_CROSS_ORG_GLOBAL_ROLES";
