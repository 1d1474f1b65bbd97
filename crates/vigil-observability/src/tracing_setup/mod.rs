//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vigil_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "VIGIL_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `VIGIL_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Only the first initialization in a
/// process takes effect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, true);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Initialize tracing from the `[observability]` config section.
///
/// `VIGIL_LOG` still wins over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        // A subscriber installed by the host application takes precedence.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
