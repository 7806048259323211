//! Tracing setup for the `ragload` binary.
//!
//! Logs go to stderr with a compact formatter so `ragload submit --json`
//! keeps stdout clean. `RUST_LOG` overrides the default `info` filter.
//! Records emitted through `log` (the core library) are captured as well.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
