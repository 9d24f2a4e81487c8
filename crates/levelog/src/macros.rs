//! crates/levelog/src/macros.rs
//! Format-template emission macros for the process-wide logger.
//!
//! Each macro is the `*f` counterpart of a pre-rendered entry point on
//! [`global`](crate::global): arguments are substituted into the template
//! with standard [`format_args!`] rules before the line is gated and
//! emitted. Expansion happens at the call site, so the `file:line` recorded
//! in debug-initialized output points at application code.

/// Emit a `Debug`-tier record on the global logger from a format template.
///
/// # Example
/// ```
/// levelog::debugf!("retrying {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::global().debugf(::core::format_args!($($arg)*))
    };
}

/// Emit an `Info`-tier record on the global logger from a format template.
///
/// # Example
/// ```
/// levelog::infof!("listening on {}", "127.0.0.1:873");
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::global().infof(::core::format_args!($($arg)*))
    };
}

/// Emit an `Error`-tier record on the global logger from a format template.
///
/// # Example
/// ```
/// levelog::errorf!("cannot reach {}: timed out", "peer");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::global().errorf(::core::format_args!($($arg)*))
    };
}

/// Emit a `Critical`-tier record on the global logger from a format
/// template.
///
/// # Example
/// ```
/// levelog::criticalf!("state {} is unrecoverable", "corrupt");
/// ```
#[macro_export]
macro_rules! criticalf {
    ($($arg:tt)*) => {
        $crate::global().criticalf(::core::format_args!($($arg)*))
    };
}

/// Emit a `PANIC - ` record with a captured stack trace, without unwinding,
/// from a format template. Ignores the configured threshold.
///
/// # Example
/// ```
/// levelog::dont_panicf!("recovered from {}", "worker crash");
/// ```
#[macro_export]
macro_rules! dont_panicf {
    ($($arg:tt)*) => {
        $crate::global().dont_panicf(::core::format_args!($($arg)*))
    };
}

/// Like [`dont_panicf!`], but emits only when the threshold admits `Debug`
/// output.
///
/// # Example
/// ```
/// levelog::debug_dont_panicf!("ignoring {} during shutdown", "poll error");
/// ```
#[macro_export]
macro_rules! debug_dont_panicf {
    ($($arg:tt)*) => {
        $crate::global().debug_dont_panicf(::core::format_args!($($arg)*))
    };
}
