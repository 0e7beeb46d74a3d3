//! Subscriber initialisation.

pub mod spans;

use tracing_subscriber::EnvFilter;

use sift_core::config::ObservabilityConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Returns `false` when a global
/// subscriber was already set (the existing one stays in place).
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
