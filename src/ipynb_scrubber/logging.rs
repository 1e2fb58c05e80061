//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with a
//! notebook written to stdout. `RUST_LOG` takes precedence over the verbosity
//! picked on the command line.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "ipynb_scrubber=warn",
        1 => "ipynb_scrubber=info",
        2 => "ipynb_scrubber=debug",
        _ => "ipynb_scrubber=trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_env_filter(filter)
            .try_init();
    });
}
