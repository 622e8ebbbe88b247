//! Logging setup for the `chatgrep` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding applications keep control of their output.
//!
//! Level priority: `RUST_LOG` > `--debug` > [`DEFAULT_LOG_LEVEL`].
//! Output always goes to stderr so the report on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter for the given flags.
pub fn env_filter(debug_flag: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// Calling it twice is harmless; the second subscriber is not installed and
/// a warning goes to the one already in place.
pub fn init(debug_flag: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug_flag))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if let Err(e) = installed {
        tracing::warn!(error = %e, "Logging subscriber already installed");
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialised"
    );
}
