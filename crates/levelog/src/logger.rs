//! crates/levelog/src/logger.rs
//! The logger instance: threshold state, level control, and emission.

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::path::Path;
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::record;
use crate::severity::Severity;
use crate::sink::{DEFAULT_LOGFILE_MODE, SetLogfileError, Sink};

/// Mutable logger state, guarded as one unit so level changes, restores, and
/// sink redirection never race against emission reads.
struct State {
    current: Severity,
    backup: Severity,
    sink: Sink,
    verbose_meta: bool,
}

/// A leveled logger with a restorable severity threshold.
///
/// The threshold starts at [`Severity::Info`]. Every call to
/// [`set_level`](Self::set_level) saves the outgoing level into a single
/// backup slot that [`restore_level`](Self::restore_level) copies back,
/// supporting the "temporarily change level, then restore" pattern. The slot
/// holds exactly one previous value, not a stack.
///
/// Emission methods gate on the current threshold, render a prefixed line,
/// and write it to the configured sink. Write failures are swallowed:
/// logging never raises an error back to the caller.
///
/// The process-wide default instance is reachable through
/// [`global`](crate::global); applications that want resettable state own
/// their instances directly.
pub struct Logger {
    state: Mutex<State>,
}

impl Logger {
    /// Creates a logger at the `Info` threshold writing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Sink::stderr())
    }

    /// Creates a logger writing to a caller-supplied destination.
    ///
    /// This is the generalized form of file redirection: tests capture
    /// output through it, and embedders can route lines anywhere that
    /// implements [`Write`].
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self::with_sink(Sink::Writer(writer))
    }

    fn with_sink(sink: Sink) -> Self {
        Self {
            state: Mutex::new(State {
                current: Severity::Info,
                backup: Severity::Info,
                sink,
                verbose_meta: false,
            }),
        }
    }

    /// A poisoned guard still holds coherent severity state; a diagnostic
    /// facility must not amplify a crash on another thread.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets the threshold to `level` and, when `level` is the most verbose
    /// tier, enables timestamp and caller `file:line` metadata on every
    /// subsequent line.
    ///
    /// Like [`set_level`](Self::set_level), this saves the outgoing level
    /// into the backup slot. Re-initializing at a higher threshold leaves
    /// previously enabled metadata on.
    pub fn init(&self, level: Severity) {
        let mut state = self.lock();
        state.backup = state.current;
        state.current = level;
        if level <= Severity::Debug {
            state.verbose_meta = true;
        }
    }

    /// Saves the current threshold into the backup slot, then sets it to
    /// `level`.
    pub fn set_level(&self, level: Severity) {
        let mut state = self.lock();
        state.backup = state.current;
        state.current = level;
    }

    /// [`set_level`](Self::set_level) accepting a raw value; anything other
    /// than the four recognized values silently becomes `Info`.
    pub fn set_level_raw(&self, raw: u8) {
        self.set_level(Severity::coerce(raw));
    }

    /// Copies the backup slot back into the current threshold.
    ///
    /// Idempotent when repeated: the slot is a single previous/current pair,
    /// so consecutive restores keep yielding the same level.
    pub fn restore_level(&self) {
        let mut state = self.lock();
        state.current = state.backup;
    }

    /// The current severity threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.lock().current
    }

    /// Redirects all subsequent emission to the append-mode file at `path`,
    /// created with the default `0o640` permission bits if absent.
    ///
    /// # Panics
    ///
    /// Fatal on open or seek failure, carrying the triggering I/O error.
    /// There is no fallback sink.
    pub fn set_logfile(&self, path: impl AsRef<Path>) {
        self.set_logfile_with_mode(path, DEFAULT_LOGFILE_MODE);
    }

    /// [`set_logfile`](Self::set_logfile) with explicit permission bits.
    ///
    /// # Panics
    ///
    /// Fatal on open or seek failure, carrying the triggering I/O error.
    pub fn set_logfile_with_mode(&self, path: impl AsRef<Path>, mode: u32) {
        if let Err(err) = self.try_set_logfile_with_mode(path, mode) {
            panic!("{err}");
        }
    }

    /// Non-fatal file redirection with the default `0o640` permission bits;
    /// the layer under [`set_logfile`](Self::set_logfile).
    ///
    /// On success the previous sink is dropped (a previously configured file
    /// is closed) and the logger owns the new file for the rest of the
    /// process lifetime. Calling this again redirects again, last write
    /// wins.
    pub fn try_set_logfile(&self, path: impl AsRef<Path>) -> Result<(), SetLogfileError> {
        self.try_set_logfile_with_mode(path, DEFAULT_LOGFILE_MODE)
    }

    /// [`try_set_logfile`](Self::try_set_logfile) with explicit permission
    /// bits.
    pub fn try_set_logfile_with_mode(
        &self,
        path: impl AsRef<Path>,
        mode: u32,
    ) -> Result<(), SetLogfileError> {
        let sink = Sink::open_file(path.as_ref(), mode)?;
        self.lock().sink = sink;
        Ok(())
    }

    /// Redirects all subsequent emission to a caller-supplied writer.
    ///
    /// The generalized form of [`set_logfile`](Self::set_logfile), for tests
    /// and embedders that own the destination. The previous sink is dropped.
    pub fn set_writer(&self, writer: Box<dyn Write + Send>) {
        self.lock().sink = Sink::Writer(writer);
    }

    /// Emits `message` at the `Debug` tier if the threshold admits it.
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, format_args!("{message}"));
    }

    /// Format-template variant of [`debug`](Self::debug); see the
    /// [`debugf!`](crate::debugf) macro for the global logger.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, args);
    }

    /// Emits `message` at the `Info` tier if the threshold admits it.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, format_args!("{message}"));
    }

    /// Format-template variant of [`info`](Self::info).
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, args);
    }

    /// Emits `message` at the `Error` tier if the threshold admits it.
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Severity::Error, format_args!("{message}"));
    }

    /// Format-template variant of [`error`](Self::error).
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, args);
    }

    /// Emits `message` at the `Critical` tier if the threshold admits it.
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.emit(Severity::Critical, format_args!("{message}"));
    }

    /// Format-template variant of [`critical`](Self::critical).
    #[track_caller]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Critical, args);
    }

    /// Emits `err`'s message as an `Error`-tier record.
    #[track_caller]
    pub fn log_error(&self, err: &dyn Error) {
        self.emit(Severity::Error, format_args!("{err}"));
    }

    /// Emits like [`log_error`](Self::log_error), then terminates the
    /// process with `code`.
    ///
    /// Termination is unconditional: it happens even when the current
    /// threshold suppresses `Error` output.
    #[track_caller]
    pub fn log_error_and_exit(&self, err: &dyn Error, code: i32) -> ! {
        self.log_error(err);
        process::exit(code)
    }

    /// [`log_error_and_exit`](Self::log_error_and_exit) with exit code 0.
    #[track_caller]
    pub fn log_error_and_exit_default(&self, err: &dyn Error) -> ! {
        self.log_error_and_exit(err, 0)
    }

    /// Emits a `PANIC - ` record carrying `value` and a captured stack
    /// trace, regardless of the current threshold, without unwinding.
    #[track_caller]
    pub fn dont_panic(&self, value: impl fmt::Display) {
        self.emit_panic_record(format_args!("{value}"));
    }

    /// Format-template variant of [`dont_panic`](Self::dont_panic).
    #[track_caller]
    pub fn dont_panicf(&self, args: fmt::Arguments<'_>) {
        self.emit_panic_record(args);
    }

    /// Like [`dont_panic`](Self::dont_panic), but only emits when the
    /// threshold admits `Debug` output.
    #[track_caller]
    pub fn debug_dont_panic(&self, value: impl fmt::Display) {
        if self.level().admits(Severity::Debug) {
            self.emit_panic_record(format_args!("{value}"));
        }
    }

    /// Format-template variant of
    /// [`debug_dont_panic`](Self::debug_dont_panic).
    #[track_caller]
    pub fn debug_dont_panicf(&self, args: fmt::Arguments<'_>) {
        if self.level().admits(Severity::Debug) {
            self.emit_panic_record(args);
        }
    }

    /// Emits the `PANIC - ` record regardless of the current threshold, then
    /// raises a fatal unwind carrying the rendered value.
    ///
    /// The record is written before the unwind starts, so the stack trace in
    /// the log reflects the call site rather than the termination site. This
    /// is the crashing counterpart of [`dont_panic`](Self::dont_panic).
    ///
    /// # Panics
    ///
    /// Always; the payload is the rendered `value` as a [`String`].
    #[track_caller]
    pub fn panic_with(&self, value: impl fmt::Display) -> ! {
        let rendered = value.to_string();
        self.emit_panic_record(format_args!("{rendered}"));
        std::panic::panic_any(rendered)
    }

    /// Gated emission shared by the leveled helpers.
    #[track_caller]
    fn emit(&self, tier: Severity, message: fmt::Arguments<'_>) {
        let caller = Location::caller();
        let mut state = self.lock();
        if !state.current.admits(tier) {
            return;
        }
        let line = record::render_line(tier.label(), message, caller, state.verbose_meta);
        // Per-write failures are swallowed; logging must not crash the caller.
        let _ = state.sink.write_line(&line);
    }

    /// Ungated emission for the panic-capture helpers.
    #[track_caller]
    fn emit_panic_record(&self, message: fmt::Arguments<'_>) {
        let caller = Location::caller();
        let rendered = record::capture_panic(message);
        let mut state = self.lock();
        let line = record::render_line(
            record::PANIC_LABEL,
            format_args!("{rendered}"),
            caller,
            state.verbose_meta,
        );
        let _ = state.sink.write_line(&line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
