use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Compact one-line events for running `portal` by hand.
/// `RUST_LOG` replaces the built-in `info,service=info` filter.
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// JSON events for log shippers. The record store logs its seed fallbacks
/// and not-found targets at debug, which this filter keeps
/// unless `RUST_LOG` says otherwise.
pub fn init_logging_json() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service::store=debug"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Select by the `[logging] format` value; only `json` picks JSON output.
pub fn init_logging(format: &str) {
    if format.eq_ignore_ascii_case("json") {
        init_logging_json();
    } else {
        init_logging_default();
    }
}
