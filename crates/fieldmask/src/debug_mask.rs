//! Structured tracing for mask construction.
//!
//! All functions are compiled behind the `tracing` feature flag and collapse
//! to no-op inline functions when it is disabled, so parsers can call them
//! unconditionally.

#[cfg(feature = "tracing")]
use crate::FormatError;
#[cfg(feature = "tracing")]
use crate::Mask;

/// Target name for tracing events emitted while masks are built.
#[cfg(feature = "tracing")]
const PARSE_TARGET: &str = "fieldmask::parse";

/// Where a mask was built from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MaskSource {
    Paths,
    Compact,
}

impl MaskSource {
    #[cfg(feature = "tracing")]
    const fn as_str(self) -> &'static str {
        match self {
            Self::Paths => "paths",
            Self::Compact => "compact",
        }
    }
}

/// Traces a successfully built mask.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_mask_built(source: MaskSource, mask: &Mask) {
    tracing::debug!(
        target: PARSE_TARGET,
        source = source.as_str(),
        exclusion = mask.is_exclusion(),
        nodes = mask.node_count(),
        depth = mask.depth(),
        "mask_built"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_mask_built(_source: MaskSource, _mask: &crate::Mask) {}

/// Traces mask source that was rejected.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_mask_rejected(source: MaskSource, error: &FormatError) {
    tracing::debug!(
        target: PARSE_TARGET,
        source = source.as_str(),
        error = %error,
        "mask_rejected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_mask_rejected(_source: MaskSource, _error: &crate::FormatError) {}
