//! Subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `-q` and `-v` win over `RUST_LOG`, which wins
/// over the configured level.
fn filter(verbose: u8, quiet: bool, configured: &str) -> EnvFilter {
    let forced = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, 2) => Some("debug"),
        (false, _) => Some("trace"),
    };

    match forced {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    }
}

/// Installs a stderr `fmt` subscriber. Output stays on stdout.
pub fn init(verbose: u8, quiet: bool, configured: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, quiet, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
