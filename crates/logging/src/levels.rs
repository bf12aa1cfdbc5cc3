//! crates/logging/src/levels.rs
//! Log levels and the library components they apply to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity threshold for emitted events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Failures only.
    Error,
    /// Failures and suspicious input.
    Warn,
    /// High-level progress.
    Info,
    /// Per-operation detail such as built masks and failed copies.
    Debug,
    /// Per-field detail.
    Trace,
}

impl LogLevel {
    /// Directive spelling understood by `tracing-subscriber` filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A level name that is not one of `error`, `warn`, `info`, `debug`,
/// `trace`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown log level '{0}'")]
pub struct LevelParseError(pub String);

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(LevelParseError(s.to_owned())),
        }
    }
}

/// Library whose events can be tuned separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    /// Mask construction (`fieldmask`).
    Parse,
    /// Structural copies (`structcopy`).
    Copy,
}

impl Component {
    /// Every component, in directive order.
    pub const ALL: [Self; 2] = [Self::Parse, Self::Copy];

    /// Crate name used as the filter directive target.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Parse => "fieldmask",
            Self::Copy => "structcopy",
        }
    }

    /// Maps an event target such as `structcopy::copy` to its component.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|component| {
            let crate_name = component.target();
            target == crate_name
                || target
                    .strip_prefix(crate_name)
                    .is_some_and(|rest| rest.starts_with("::"))
        })
    }
}
