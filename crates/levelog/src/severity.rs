//! crates/levelog/src/severity.rs
//! The four-tier severity scale and its raw-value conversions.

use std::fmt;

/// Severity of a log record, ordered from most to least verbose.
///
/// Discriminants keep the bit-flag-shaped values of the original scale
/// (1, 2, 4, 8), but tiers nest ordinally rather than combining as a mask:
/// a configured threshold admits every tier whose numeric value is greater
/// than or equal to its own. `Debug` therefore shows everything and
/// `Critical` shows only itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Most verbose tier; a threshold of `Debug` admits every record.
    Debug = 1,
    /// Routine operational messages; the process-wide default threshold.
    Info = 2,
    /// Recoverable failures.
    Error = 4,
    /// Failures the process is unlikely to survive.
    Critical = 8,
}

impl Severity {
    /// Textual name used as the prefix of emitted lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Numeric value of the tier on the ordinal scale.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Converts a raw value back to its tier, if it is one of the four
    /// recognized values.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            4 => Some(Self::Error),
            8 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Converts a raw value to a tier, substituting [`Severity::Info`] for
    /// anything unrecognized.
    ///
    /// The silent substitution is the documented contract of level control,
    /// not an error path: callers handing over an out-of-range value get the
    /// permissive default instead of a rejection.
    #[must_use]
    pub const fn coerce(raw: u8) -> Self {
        match Self::from_raw(raw) {
            Some(severity) => severity,
            None => Self::Info,
        }
    }

    /// Returns `true` when a record at `tier` passes a threshold of `self`.
    #[must_use]
    pub const fn admits(self, tier: Self) -> bool {
        self as u8 <= tier as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
