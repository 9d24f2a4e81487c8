//! Integration tests for file-sink redirection.
//!
//! The file is opened append-mode with explicit end-of-file positioning and
//! is never truncated, across any number of redirects. Failure to open or
//! position the file is fatal.

use std::fs;
use std::panic::{AssertUnwindSafe, catch_unwind};

use levelog::{Logger, Severity};
use tempfile::tempdir;

// ============================================================================
// Append Semantics
// ============================================================================

/// Verifies emitted lines land in the configured file.
#[test]
fn records_reach_the_configured_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("levelog.log");

    let logger = Logger::new();
    logger.set_logfile(&path);
    logger.info("first record");
    logger.error("second record");

    let contents = fs::read_to_string(&path).expect("log file readable");
    assert_eq!(contents, "INFO - first record\nERROR - second record\n");
}

/// Verifies redirection appends to pre-existing content instead of
/// truncating it.
#[test]
fn redirection_never_truncates_existing_content() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("levelog.log");
    fs::write(&path, "earlier run\n").expect("seed file");

    let logger = Logger::new();
    logger.set_logfile(&path);
    logger.info("appended");

    let contents = fs::read_to_string(&path).expect("log file readable");
    assert_eq!(contents, "earlier run\nINFO - appended\n");
}

/// Verifies redirecting twice keeps appending (last write wins, nothing
/// lost).
#[test]
fn repeated_redirection_keeps_appending() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("levelog.log");

    let logger = Logger::new();
    logger.set_logfile(&path);
    logger.info("one");
    logger.set_logfile(&path);
    logger.info("two");

    let contents = fs::read_to_string(&path).expect("log file readable");
    assert_eq!(contents, "INFO - one\nINFO - two\n");
}

/// Verifies a redirect can move output to a different file mid-process.
#[test]
fn redirect_moves_subsequent_output() {
    let dir = tempdir().expect("tempdir");
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");

    let logger = Logger::new();
    logger.set_logfile(&first);
    logger.info("to first");
    logger.set_logfile(&second);
    logger.info("to second");

    assert_eq!(
        fs::read_to_string(&first).expect("first readable"),
        "INFO - to first\n"
    );
    assert_eq!(
        fs::read_to_string(&second).expect("second readable"),
        "INFO - to second\n"
    );
}

// ============================================================================
// Permission Bits
// ============================================================================

/// Verifies files created without an explicit mode get the `0o640` default.
#[cfg(unix)]
#[test]
fn created_files_default_to_restricted_group_read() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("default-mode.log");

    let logger = Logger::new();
    logger.set_logfile(&path);
    logger.info("default bits");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o640);
}

/// Verifies explicit permission bits are applied to newly created files.
#[cfg(unix)]
#[test]
fn created_files_honor_the_requested_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("restricted.log");

    let logger = Logger::new();
    logger.set_logfile_with_mode(&path, 0o600);
    logger.info("private");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

// ============================================================================
// Fatal Misconfiguration
// ============================================================================

/// Verifies a nonexistent parent directory is fatal, not silently ignored.
#[test]
fn missing_parent_directory_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("levelog.log");

    let logger = Logger::new();
    let result = catch_unwind(AssertUnwindSafe(|| logger.set_logfile(&path)));
    assert!(result.is_err(), "set_logfile must be fatal on open failure");
}

/// Verifies the non-fatal layer reports a typed open error instead.
#[test]
fn try_set_logfile_surfaces_the_open_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("levelog.log");

    let logger = Logger::new();
    let err = logger
        .try_set_logfile(&path)
        .expect_err("open must fail");
    assert!(err.to_string().starts_with("failed to open log file"));

    // The logger is still usable on its original sink afterwards.
    logger.set_level(Severity::Critical);
    logger.critical("still alive");
}
