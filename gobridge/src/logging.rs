//! Log output for the `gobridge` binary.
//!
//! Filtering is read from `GOBRIDGE_LOG`, falling back to `RUST_LOG`, using
//! the usual directive syntax:
//!
//! ```bash
//! GOBRIDGE_LOG=gobridge_parser=debug gobridge generate
//! ```
//!
//! Without either variable only `info` and above from the gobridge crates is
//! shown, or `debug` with `--verbose`. Everything is written to stderr so the
//! generation summary and `inspect --json` stay clean on stdout.

use eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, fmt};

const LOG_ENV: &str = "GOBRIDGE_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "gobridge=debug"
    } else {
        "gobridge=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    let from_env = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok()
        .filter(|value| !value.trim().is_empty());
    match from_env {
        Some(value) => EnvFilter::builder().parse_lossy(value),
        None => EnvFilter::new(default_directive(verbose)),
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool) -> Result<()> {
    fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))
}
