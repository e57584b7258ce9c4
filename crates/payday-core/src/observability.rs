//! Tracing subscriber setup. Called once by the binary; libraries only emit events.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::errors::ConfigError;

/// Install the global subscriber, writing to stderr so command output stays clean.
///
/// Filter precedence: `verbose` forces `debug`, then `RUST_LOG`, then
/// `config.log_level`.
pub fn init_tracing(config: &ObservabilityConfig, verbose: bool) -> Result<(), ConfigError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::Invalid {
                field: "observability.log_level".to_string(),
                message: e.to_string(),
            })?,
        }
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };
    installed.map_err(|e| ConfigError::Tracing(e.to_string()))
}
