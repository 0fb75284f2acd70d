//! Log output through a `tracing-subscriber` fmt layer
//!
//! The crate logs with the `log` macros; the subscriber's `tracing-log`
//! bridge forwards those records to the fmt layer on stderr.

use crate::io::error::{PatternError, Result};
use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `--quiet` and the `-v` count to a level
///
/// Quiet keeps errors only; otherwise warnings, then info, debug and trace
/// per extra `-v`.
pub const fn level_for(quiet: bool, verbosity: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter applying `level` unless `RUST_LOG` has a directive for the target
pub fn filter_for(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install the global subscriber writing to stderr
///
/// # Errors
///
/// Returns `LoggerInit` if a subscriber or `log` backend is already set
pub fn init(level: LevelFilter) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt_layer)
        .try_init()
        .map_err(|source| PatternError::LoggerInit { source })
}
