//! Configuration. TOML-based, 3-layer resolution: env > file > defaults.

pub mod access_config;
pub mod policy_config;
pub mod storage_config;

pub use access_config::AccessConfig;
pub use policy_config::PolicyConfig;
pub use storage_config::StorageConfig;
