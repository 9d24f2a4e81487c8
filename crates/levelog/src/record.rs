//! crates/levelog/src/record.rs
//! Rendering of a single log line: prefix, optional metadata, message.
//!
//! A record is built and serialized in one step; nothing here is retained
//! after the line reaches the sink. The caller's source location arrives via
//! [`std::panic::Location`] captured at the public entry points, so the
//! reported `file:line` is the application call site rather than a logging
//! internal.

use std::backtrace::Backtrace;
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::Path;

use chrono::Local;

/// Prefix name for records emitted by the panic-capture helpers.
pub(crate) const PANIC_LABEL: &str = "PANIC";

/// Timestamp layout for debug-initialized loggers.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Renders one line as `[timestamp ][file:line: ]LABEL - message`.
///
/// Timestamp and caller location are included only when `verbose_meta` is
/// set, which happens when the logger was initialized at the most verbose
/// threshold. Only the file's base name is printed.
pub(crate) fn render_line(
    label: &str,
    message: fmt::Arguments<'_>,
    caller: &Location<'_>,
    verbose_meta: bool,
) -> String {
    let mut line = String::new();
    if verbose_meta {
        let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
        let file = Path::new(caller.file())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_else(|| caller.file());
        let _ = write!(line, "{file}:{}: ", caller.line());
    }
    let _ = write!(line, "{label} - {message}");
    line
}

/// Renders a panic-capture message: the value followed by a stack trace.
///
/// The backtrace is captured unconditionally, independent of the
/// `RUST_BACKTRACE` environment variables, because the whole point of the
/// panic-capture helpers is to preserve the stack at the call site.
pub(crate) fn capture_panic(message: fmt::Arguments<'_>) -> String {
    let trace = Backtrace::force_capture();
    format!("{message}\n {trace}")
}
