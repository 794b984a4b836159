//! Diagnostic logging setup.
//!
//! Status lines meant for the user go to stdout with `println!`; everything
//! emitted through `tracing` goes to stderr, filtered by `STITCHER_LOG` /
//! `RUST_LOG` (default `warn`).

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("warning: ignoring invalid log filter '{}': {}", filter, e);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
