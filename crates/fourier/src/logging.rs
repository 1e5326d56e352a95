//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Build the log filter.
///
/// A non-empty `RUST_LOG` value wins. Otherwise the level is WARN, or DEBUG
/// with `--verbose`. An unparseable `RUST_LOG` falls back to the default.
#[must_use]
pub fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Install the global stderr subscriber, reading `RUST_LOG` from the environment.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .init();
}
