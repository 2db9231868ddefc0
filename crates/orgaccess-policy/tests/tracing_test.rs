use orgaccess_core::config::AccessConfig;
use orgaccess_policy::tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};

#[test]
fn repeated_initialisation_is_harmless() {
    init_tracing_with_filter("orgaccess_policy=debug");
    init_tracing();
    init_tracing_from_config(&AccessConfig::default());
    tracing::info!(component = "policy", "tracing initialised");
}
