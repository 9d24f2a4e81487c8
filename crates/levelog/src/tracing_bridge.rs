//! crates/levelog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the leveled logger.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into the process-wide [`Logger`](crate::Logger). It lets code
//! written against the standard tracing macros (trace!, debug!, info!,
//! warn!, error!) land in the same gated, prefixed output stream as the
//! native emission helpers.
//!
//! # Level mapping
//!
//! - `TRACE`, `DEBUG` → [`Severity::Debug`]
//! - `INFO` → [`Severity::Info`]
//! - `WARN`, `ERROR` → [`Severity::Error`]
//!
//! `Critical` has no tracing counterpart and is only reachable through the
//! native helpers. The logger's threshold still applies: a forwarded event
//! is dropped unless the current level admits its mapped tier.
//!
//! # Usage
//!
//! ```rust,ignore
//! use levelog::{Severity, init_logger, init_tracing};
//!
//! init_logger(Severity::Debug);
//! init_tracing();
//!
//! tracing::info!("visible through the leveled logger");
//! ```

use crate::severity::Severity;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that forwards events to the global leveled logger.
pub struct LevelLayer {
    _private: (),
}

impl LevelLayer {
    /// Creates a layer forwarding to [`global`](crate::global).
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Maps a tracing level to the severity tier it is emitted at.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR | Level::WARN => Severity::Error,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl Default for LevelLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for LevelLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let tier = Self::level_to_severity(event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let logger = crate::global();
        match tier {
            Severity::Debug => logger.debug(message),
            Severity::Info => logger.info(message),
            Severity::Error => logger.error(message),
            Severity::Critical => logger.critical(message),
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that routes events into the leveled
/// logger.
///
/// The logger's threshold keeps gating forwarded events, so raising or
/// restoring the level affects tracing output the same way it affects the
/// native helpers.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(LevelLayer::new()).init();
}

/// Like [`init_tracing`], with an additional filter layer (for example an
/// `EnvFilter`) applied before events reach the leveled logger.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LevelLayer::new())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_and_error_map_to_the_error_tier() {
        assert_eq!(LevelLayer::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(LevelLayer::level_to_severity(&Level::WARN), Severity::Error);
    }

    #[test]
    fn info_maps_to_info() {
        assert_eq!(LevelLayer::level_to_severity(&Level::INFO), Severity::Info);
    }

    #[test]
    fn verbose_levels_map_to_debug() {
        assert_eq!(LevelLayer::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(LevelLayer::level_to_severity(&Level::TRACE), Severity::Debug);
    }
}
