//! Diagnostics go to stderr through `tracing`, so stdout stays clean for `list --json`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Level for this crate's events given the number of `-v` flags
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Filter directives used when `RUST_LOG` is not set. Dependencies stay at `warn`.
pub fn default_directives(verbose: u8) -> String {
    format!("warn,prompt_catalog={}", level_for_verbosity(verbose))
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flags.
pub fn init(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::builder().parse(default_directives(verbose)))
        .map_err(|e| anyhow!("Invalid log filter: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
