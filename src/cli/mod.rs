//! CLI infrastructure for the perfect_play binary
//!
//! This module provides the command-line interface for playing against the
//! engine, solving single positions and running computer-versus-computer
//! series.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "perfect_play=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (e.g. in tests); keep the first.
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(%err, "keeping existing tracing subscriber");
    }
}
