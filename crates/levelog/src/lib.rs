#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levelog` is a minimal process-wide logging facility: a global severity
//! threshold, leveled print helpers (debug/info/error/critical), optional
//! redirection of output to an append-mode file, and "log-but-don't-crash"
//! helpers that capture a stack trace without terminating the process.
//!
//! # Design
//!
//! The crate exposes one component, [`Logger`]. An instance owns the current
//! threshold, a single-slot backup of the previously active threshold, and
//! the output [sink](Logger::set_logfile). All of that state sits behind one
//! mutex, so level changes never race against emission. A process-wide
//! default instance is reachable through [`global`]; the free functions and
//! the [`infof!`]-family macros delegate to it. Applications that want
//! resettable state (tests, embedders) construct their own [`Logger`] and
//! pass it around explicitly.
//!
//! Each tier has two entry points: one accepting a pre-rendered message
//! ([`Logger::info`]) and one accepting a format template plus arguments
//! ([`Logger::infof`], [`infof!`]). Emission gates on the current threshold,
//! prefixes the line with the tier name, and writes it in a single call.
//!
//! # Invariants
//!
//! - Exactly one severity is current at any time; the backup slot holds
//!   exactly one previous value, never a stack.
//! - Emission never returns an error and never panics, even when the sink
//!   rejects a write.
//! - The `PANIC - ` helpers always write their record before any unwind or
//!   exit they trigger.
//! - A redirected log file is opened append-mode and explicitly positioned
//!   at end-of-file; existing content is never truncated.
//!
//! # Errors
//!
//! Pointing the logger at a file that cannot be opened or positioned is
//! fatal ([`Logger::set_logfile`] panics with the triggering
//! [`SetLogfileError`]); there is no fallback sink. Everything else is
//! silent: invalid raw severities coerce to `Info`, failed writes are
//! swallowed.
//!
//! # Examples
//!
//! Threshold control with the single-slot backup:
//!
//! ```
//! use levelog::{Logger, Severity};
//!
//! let logger = Logger::new();
//! logger.set_level(Severity::Error);
//! logger.set_level(Severity::Debug);
//! logger.restore_level();
//! assert_eq!(logger.level(), Severity::Error);
//! ```
//!
//! Capturing output through a caller-supplied writer:
//!
//! ```
//! use std::io::{self, Write};
//! use std::sync::{Arc, Mutex};
//!
//! use levelog::{Logger, Severity};
//!
//! #[derive(Clone, Default)]
//! struct Capture(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for Capture {
//!     fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
//!         self.0.lock().unwrap().extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let capture = Capture::default();
//! let logger = Logger::with_writer(Box::new(capture.clone()));
//! logger.debug("below the default threshold");
//! logger.info("routine");
//! logger.critical("last words");
//!
//! let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
//! assert!(!output.contains("below the default threshold"));
//! assert!(output.contains("INFO - routine"));
//! assert!(output.contains("CRITICAL - last words"));
//! ```

mod logger;
mod macros;
mod record;
mod severity;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

pub use logger::Logger;
pub use severity::Severity;
pub use sink::{DEFAULT_LOGFILE_MODE, SetLogfileError};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevelLayer, init_tracing, init_tracing_with_filter};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger.
///
/// The instance is created on first use at the `Info` threshold, writing to
/// standard error, so the process-wide state exists before any other call
/// can observe it.
#[must_use]
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Initializes the global logger; see [`Logger::init`].
pub fn init_logger(level: Severity) {
    global().init(level);
}

/// Redirects global output to an append-mode file; see
/// [`Logger::set_logfile`].
///
/// # Panics
///
/// Fatal on open or seek failure.
pub fn set_logfile(path: impl AsRef<Path>) {
    global().set_logfile(path);
}

/// [`set_logfile`] with explicit permission bits; see
/// [`Logger::set_logfile_with_mode`].
///
/// # Panics
///
/// Fatal on open or seek failure.
pub fn set_logfile_with_mode(path: impl AsRef<Path>, mode: u32) {
    global().set_logfile_with_mode(path, mode);
}

/// Non-fatal global file redirection with the default permission bits; see
/// [`Logger::try_set_logfile`].
pub fn try_set_logfile(path: impl AsRef<Path>) -> Result<(), SetLogfileError> {
    global().try_set_logfile(path)
}

/// [`try_set_logfile`] with explicit permission bits; see
/// [`Logger::try_set_logfile_with_mode`].
pub fn try_set_logfile_with_mode(
    path: impl AsRef<Path>,
    mode: u32,
) -> Result<(), SetLogfileError> {
    global().try_set_logfile_with_mode(path, mode)
}

/// Sets the global threshold, saving the outgoing level into the backup
/// slot; see [`Logger::set_level`].
pub fn set_log_level(level: Severity) {
    global().set_level(level);
}

/// [`set_log_level`] accepting a raw value; unrecognized values silently
/// become `Info`.
pub fn set_log_level_raw(raw: u8) {
    global().set_level_raw(raw);
}

/// Restores the global threshold from the backup slot; see
/// [`Logger::restore_level`].
pub fn restore_log_level() {
    global().restore_level();
}

/// Emits a `Debug`-tier record on the global logger.
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    global().debug(message);
}

/// Emits an `Info`-tier record on the global logger.
#[track_caller]
pub fn info(message: impl fmt::Display) {
    global().info(message);
}

/// Emits an `Error`-tier record on the global logger.
#[track_caller]
pub fn error(message: impl fmt::Display) {
    global().error(message);
}

/// Emits a `Critical`-tier record on the global logger.
#[track_caller]
pub fn critical(message: impl fmt::Display) {
    global().critical(message);
}

/// Emits `err`'s message as an `Error`-tier record on the global logger.
#[track_caller]
pub fn log_error(err: &dyn Error) {
    global().log_error(err);
}

/// Emits like [`log_error`], then terminates the process with `code`; see
/// [`Logger::log_error_and_exit`].
#[track_caller]
pub fn log_error_and_exit(err: &dyn Error, code: i32) -> ! {
    global().log_error_and_exit(err, code)
}

/// [`log_error_and_exit`] with exit code 0.
#[track_caller]
pub fn log_error_and_exit_default(err: &dyn Error) -> ! {
    global().log_error_and_exit_default(err)
}

/// Emits a `PANIC - ` record with a stack trace, without unwinding; see
/// [`Logger::dont_panic`].
#[track_caller]
pub fn dont_panic(value: impl fmt::Display) {
    global().dont_panic(value);
}

/// Like [`dont_panic`], gated on the threshold admitting `Debug` output.
#[track_caller]
pub fn debug_dont_panic(value: impl fmt::Display) {
    global().debug_dont_panic(value);
}

/// Emits the `PANIC - ` record, then raises a fatal unwind carrying the
/// rendered value; see [`Logger::panic_with`].
///
/// # Panics
///
/// Always.
#[track_caller]
pub fn panic_with(value: impl fmt::Display) -> ! {
    global().panic_with(value)
}
