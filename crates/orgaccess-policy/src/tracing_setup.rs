//! Tracing setup: structured JSON logging filtered by `ORGACCESS_LOG`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use orgaccess_core::config::AccessConfig;
use orgaccess_core::constants::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `ORGACCESS_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Only the first call has an effect.
pub fn init_tracing() {
    init_with_fallback(DEFAULT_LOG_LEVEL);
}

/// Like [`init_tracing`], falling back to `config.log_level` when
/// `ORGACCESS_LOG` is unset.
pub fn init_tracing_from_config(config: &AccessConfig) {
    init_with_fallback(&config.log_level);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .init();
    });
}

fn init_with_fallback(fallback: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .init();
    });
}
