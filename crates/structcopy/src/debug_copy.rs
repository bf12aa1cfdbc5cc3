//! Structured tracing for field copies.
//!
//! Compiled behind the `tracing` feature flag. Without it every function is
//! an empty inline stub, so the engine calls them unconditionally.

#[cfg(feature = "tracing")]
use crate::CopyError;
use crate::record::Shape;

/// Target name for tracing events emitted while records are copied.
#[cfg(feature = "tracing")]
const COPY_TARGET: &str = "structcopy::copy";

/// Why a source field was not copied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SkipReason {
    /// The name starts with the reserved prefix.
    Reserved,
    /// The mask does not include the field.
    Filtered,
}

impl SkipReason {
    #[cfg(feature = "tracing")]
    const fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::Filtered => "filtered",
        }
    }
}

/// Traces a field the copy left alone.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_field_skipped(record: &'static str, field: &str, reason: SkipReason) {
    tracing::trace!(
        target: COPY_TARGET,
        record,
        field,
        reason = reason.as_str(),
        "field_skipped"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_field_skipped(_record: &'static str, _field: &str, _reason: SkipReason) {}

/// Traces a field written to the destination.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_field_copied(record: &'static str, field: &str, shape: Shape) {
    tracing::trace!(
        target: COPY_TARGET,
        record,
        field,
        shape = shape.as_str(),
        "field_copied"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_field_copied(_record: &'static str, _field: &str, _shape: Shape) {}

/// Traces a copy that stopped on an error.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_copy_failed(error: &CopyError) {
    tracing::debug!(
        target: COPY_TARGET,
        record = error.record(),
        field_path = %error.field_path(),
        error = %error.root_cause(),
        "copy_failed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_copy_failed(_error: &crate::CopyError) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_helpers_accept_every_input() {
        for reason in [SkipReason::Reserved, SkipReason::Filtered] {
            trace_field_skipped("Order", "_id", reason);
        }
        trace_field_copied("Order", "items", Shape::RepeatedRecord);
        trace_copy_failed(&crate::CopyError::MissingField {
            record: "Order",
            field: "total",
        });
    }
}
