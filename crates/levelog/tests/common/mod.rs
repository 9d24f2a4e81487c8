//! Shared output-capture writer for the integration suites.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use levelog::Logger;

/// Cloneable writer that accumulates everything written through it.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("log output is utf-8")
    }

    /// Emitted lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A fresh logger wired to a capture buffer.
pub fn captured_logger() -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::with_writer(Box::new(capture.clone()));
    (logger, capture)
}
