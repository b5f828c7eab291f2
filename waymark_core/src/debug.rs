//! Debug logging module for development-time diagnostics
//!
//! These macros print compiler and matcher internals while working on the
//! crate itself. They are controlled by the `dev-log` feature and expand to
//! nothing without it, so release builds carry no logging code.
//!
//! Logging that a host application wants at runtime goes through a
//! [`TraceSink`](crate::filter::TraceSink) attached to a single pattern instead.
//!
//! # Usage
//!
//! ```bash
//! cargo test --features "dev-log"
//! ```
//!
//! ```rust
//! use waymark_core::{debug_error, debug_log, debug_trace};
//!
//! debug_log!("Compiled filter {:?}", "user/<name>");
//! debug_trace!("walk: {} tokens", 3);
//! debug_error!("Rejected filter {:?}", "user/<name");
//! ```

/// General-purpose debug logging macro
///
/// Outputs informational messages prefixed with `[DEBUG]`.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        println!("[DEBUG] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

/// Warning logging macro, written to stderr with a `[WARN]` prefix.
///
/// # Examples
/// ```rust
/// use waymark_core::debug_warn;
/// debug_warn!("Filter {:?} has an unclosed variable", "user/<name");
/// ```
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_warn {
    ($($arg:tt)*) => {
        eprintln!("[WARN] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_warn {
    ($($arg:tt)*) => {};
}

/// Error logging macro, written to stderr with an `[ERROR]` prefix.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_error {
    ($($arg:tt)*) => {
        eprintln!("[ERROR] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_error {
    ($($arg:tt)*) => {};
}

/// Detailed trace logging for step-by-step matcher output, prefixed with `[TRACE]`.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        println!("[TRACE] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_trace {
    ($($arg:tt)*) => {};
}
