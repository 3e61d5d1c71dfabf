//! Logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or JSON formatting layer. `RUST_LOG` takes precedence over
//! the configured default filter.

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "tally".to_string(),
            default_filter: "tally_calculator=info".to_string(),
            json: false,
            with_target: false,
        }
    }
}

impl TracingConfig {
    /// Create configuration from environment variables
    ///
    /// - `TALLY_SERVICE_NAME`: service name
    /// - `TALLY_LOG`: default filter directives
    /// - `TALLY_LOG_FORMAT`: `json` for JSON lines
    /// - `TALLY_LOG_TARGET`: `true` to include targets
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            service_name: lookup("TALLY_SERVICE_NAME").unwrap_or(defaults.service_name),
            default_filter: lookup("TALLY_LOG").unwrap_or(defaults.default_filter),
            json: lookup("TALLY_LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json),
            with_target: lookup("TALLY_LOG_TARGET")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.with_target),
        }
    }
}

/// Install the global subscriber.
///
/// Fails if the filter directives do not parse or a global subscriber is
/// already set.
pub fn init_tracing(config: TracingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(fmt::layer().json().with_target(config.with_target)).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(config.with_target)).try_init()?;
    }

    info!(
        service_name = %config.service_name,
        json = config.json,
        "Logging initialized"
    );
    Ok(())
}
