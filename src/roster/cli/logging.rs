//! Logging setup for the binary.
//!
//! The library only emits `tracing` events. This installs the subscriber that
//! prints them to stderr, so diagnostics never mix with the table on stdout.
//!
//! `RUST_LOG` takes precedence. Without it the level comes from `-v`:
//!
//! - none: `warn` (fetch failures, failed validation)
//! - `-v`: `info`
//! - `-vv`: `debug` (every state transition)
//! - `-vvv`: `trace`

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster={}", level.as_str().to_lowercase())))
}

pub fn init_logging(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level_for(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();

    // A subscriber may already be installed (tests); keep it
    if let Err(err) = result {
        tracing::debug!(error = %err, "logging already initialized");
    }
}
