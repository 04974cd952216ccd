//! Logging initialization.
//!
//! Structured JSON in production, human-readable output otherwise. The
//! `RUST_LOG` environment variable overrides the configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Modules whose debug output is rarely useful.
pub const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "h2", "tower"];

/// Build the filter: `RUST_LOG` if set, else `log_level` with noisy modules at `warn`.
fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }

    EnvFilter::new(directives)
}

/// Initialize the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(log_level: &str, json: bool) {
    let filter = build_filter(log_level);
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        let _ = subscriber.with(fmt_layer).try_init();
    }
}
