//! crates/levelog/src/sink.rs
//! Output destinations for rendered log lines.
//!
//! The default sink is the process's standard error stream. A logger can be
//! redirected once (or more, last write wins) to an append-mode file, or to
//! an arbitrary writer for callers that manage their own destinations. Each
//! rendered line is written with a single formatted call so concurrent
//! emitters interleave at line granularity.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use thiserror::Error;

/// Default permission bits for newly created log files.
pub const DEFAULT_LOGFILE_MODE: u32 = 0o640;

/// Failure to point a logger at a file destination.
///
/// Both variants are treated as fatal by the panicking redirection entry
/// points: a logger that cannot reach its configured destination cannot
/// guarantee observability and must not continue silently.
#[derive(Debug, Error)]
pub enum SetLogfileError {
    /// The file could not be opened or created.
    #[error("failed to open log file {path}: {source}")]
    Open {
        /// Path of the requested log file.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file opened but could not be positioned at end-of-file.
    #[error("failed to seek to end of log file {path}: {source}")]
    Seek {
        /// Path of the requested log file.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Destination stream for emitted lines.
///
/// `Debug` is implemented manually because the `Writer` variant holds a
/// `Box<dyn Write + Send>`, which cannot be derived.
pub(crate) enum Sink {
    /// The process's standard error stream.
    Stderr,
    /// An append-mode file owned by the logger for the process lifetime.
    File(File),
    /// A caller-supplied writer, used mainly by tests and embedders.
    Writer(Box<dyn Write + Send>),
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::File(file) => f.debug_tuple("File").field(file).finish(),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl Sink {
    pub(crate) const fn stderr() -> Self {
        Self::Stderr
    }

    /// Opens `path` read/write in append mode, creating it with `mode` if
    /// absent, and seeks to end-of-file.
    ///
    /// Append mode already positions writes at the end on the platforms we
    /// target; the explicit seek guards the ones where it does not.
    pub(crate) fn open_file(path: &Path, mode: u32) -> Result<Self, SetLogfileError> {
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path).map_err(|source| SetLogfileError::Open {
            path: path.display().to_string(),
            source,
        })?;
        file.seek(SeekFrom::End(0))
            .map_err(|source| SetLogfileError::Seek {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::File(file))
    }

    /// Writes one rendered line plus the newline terminator.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{line}")
            }
            Self::File(file) => writeln!(file, "{line}"),
            Self::Writer(writer) => writeln!(writer, "{line}"),
        }
    }
}
