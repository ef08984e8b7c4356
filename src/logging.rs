//! Logging initialization
//!
//! One subscriber per process, writing to stderr so printed output and
//! exports on stdout stay clean.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Filter directive for a `-v` count.
///
/// 0 → warn, 1 → info, 2 → debug, 3+ → trace, all scoped to this crate.
pub fn directive_for(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("resume_compare={level},rcmp={level}")
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins over the verbosity flag. Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directive_for(verbosity)));
        // Another subscriber may already be installed (tests); keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
