//! Integration test for the tracing bridge feature.
//!
//! Events emitted through the standard tracing macros must land in the
//! leveled logger at their mapped severity and honor the configured
//! threshold. A single test function keeps the shared global logger
//! deterministic.

#![cfg(feature = "tracing")]

mod common;

use common::Capture;
use levelog::{LevelLayer, Severity};
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn tracing_events_flow_through_the_leveled_gate() {
    let capture = Capture::default();
    levelog::global().set_writer(Box::new(capture.clone()));
    levelog::set_log_level(Severity::Info);

    let subscriber = tracing_subscriber::registry().with(LevelLayer::new());
    tracing::subscriber::with_default(subscriber, || {
        tracing::trace!("trace suppressed");
        tracing::debug!("debug suppressed");
        tracing::info!("info forwarded");
        tracing::warn!("warn forwarded");
        tracing::error!("error forwarded");
    });

    let lines = capture.lines();
    assert_eq!(
        lines,
        [
            "INFO - info forwarded",
            "ERROR - warn forwarded",
            "ERROR - error forwarded",
        ]
    );

    // Raising the threshold gates forwarded events the same way.
    capture.clear();
    levelog::set_log_level(Severity::Critical);
    let subscriber = tracing_subscriber::registry().with(LevelLayer::new());
    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("still below critical");
    });
    assert!(capture.lines().is_empty());

    levelog::restore_log_level();
}
