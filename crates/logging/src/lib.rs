#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the `-v` count of the `fmask` tools into tracing filter
//! directives and, with the `tracing` feature, installs the process-wide
//! subscriber that prints events to standard error.
//!
//! # Design
//!
//! - [`LogConfig`] holds one [`LogLevel`] per library [`Component`] plus a
//!   base level for all other targets. [`LogConfig::from_verbose_level`]
//!   applies the verbosity table; [`LogConfig::with_directives`] replaces it
//!   with raw `RUST_LOG`-style directives.
//! - `init_tracing` (feature `tracing`) builds an `EnvFilter` from
//!   [`LogConfig::filter_directives`] and installs a formatting layer.
//!
//! # Invariants
//!
//! - Verbosity saturates: any count above three behaves like three.
//! - Installing a subscriber twice returns an error instead of panicking.
//!
//! # Examples
//!
//! ```
//! use logging::{Component, LogConfig, LogLevel};
//!
//! let mut config = LogConfig::from_verbose_level(1);
//! config.apply_component(Component::Copy, LogLevel::Trace);
//! assert_eq!(config.filter_directives(), "info,structcopy=trace");
//! ```

mod config;
mod levels;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LogConfig;
pub use levels::{Component, LevelParseError, LogLevel};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{InitError, build_filter, init_tracing};
