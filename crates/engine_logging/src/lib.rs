#![deny(missing_docs)]
//! Shared logging utilities for the mockconv workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a verbosity-to-level mapping for the command line and a minimal test
//! initializer for the global logger.

use std::sync::Once;

use log::LevelFilter;

/// Log target used by every `engine_*` macro.
pub const LOG_TARGET: &str = "mockconv";

/// Maps a `-v` repeat count to a level filter.
///
/// Zero means warnings only; each extra `v` opens one more level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs a trace-level message under the workspace target.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the workspace target.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the workspace target.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the workspace target.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the workspace target.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Only the first call installs the logger; later calls are no-ops, so every
/// test can call this unconditionally.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        // Another harness may already own the global logger.
        let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_opens_levels_in_order() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn repeated_test_init_is_harmless() {
        initialize_for_tests();
        initialize_for_tests();
        engine_debug!("logger initialized twice");
    }
}
