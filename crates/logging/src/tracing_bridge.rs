//! crates/logging/src/tracing_bridge.rs
//! Installs the global tracing subscriber for a [`LogConfig`].
//!
//! Events are filtered with an [`EnvFilter`] built from
//! [`LogConfig::filter_directives`] and written to standard error, one line
//! per event with its target.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LogConfig, init_tracing};
//!
//! let config = LogConfig::from_verbose_level(2);
//! init_tracing(&config)?;
//!
//! tracing::debug!(target: "structcopy::copy", "now visible");
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::LogConfig;

/// Reasons the subscriber could not be installed.
#[derive(Debug, Error)]
pub enum InitError {
    /// The directives do not parse.
    #[error("invalid log directives '{directives}': {source}")]
    InvalidDirectives {
        /// Directive text that was rejected.
        directives: String,
        /// Parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// Another global subscriber is already in place.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Builds the event filter for `config` without installing anything.
///
/// # Errors
///
/// Returns [`InitError::InvalidDirectives`] when the directives do not
/// parse.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, InitError> {
    let directives = config.filter_directives();
    EnvFilter::try_new(&directives)
        .map_err(|source| InitError::InvalidDirectives { directives, source })
}

/// Installs a stderr subscriber filtered according to `config`.
///
/// # Errors
///
/// Returns [`InitError`] for unparsable directives or when a global
/// subscriber already exists. Neither case panics.
pub fn init_tracing(config: &LogConfig) -> Result<(), InitError> {
    let filter = build_filter(config)?;
    let output = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()?;

    tracing::debug!(
        target: "logging",
        directives = %config.filter_directives(),
        "subscriber_installed"
    );
    Ok(())
}
