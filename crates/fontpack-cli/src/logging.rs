//! Diagnostic logging setup.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the stderr subscriber, reporting a failure once on stderr.
///
/// Conversion does not depend on logging, so the run continues either way.
pub fn init(verbose: u8) {
    if let Err(e) = try_init(verbose) {
        eprintln!("{} logging disabled: {}", "!".yellow(), e);
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the level from `warn`
/// to `info` and `-vv` to `debug`. Fails if a global subscriber is
/// already installed.
pub fn try_init(verbose: u8) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
