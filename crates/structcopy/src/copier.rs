//! crates/structcopy/src/copier.rs
//!
//! Record-to-record copy.

use fieldmask::{FieldFilter, is_reserved};

use crate::debug_copy::{SkipReason, trace_copy_failed, trace_field_copied, trace_field_skipped};
use crate::error::{CopyError, CopyResult};
use crate::options::CopyOptions;
use crate::record::{FieldMut, FieldRef, Record};

/// Copies record fields selected by a [`FieldFilter`].
///
/// A copier holds only its [`CopyOptions`]; it is `Copy` and can be shared
/// freely between threads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Copier {
    options: CopyOptions,
}

impl Copier {
    /// Creates a copier with the given options.
    #[must_use]
    pub const fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    /// Options this copier was built with.
    #[must_use]
    pub const fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Copies every field of `source` selected by `filter` into
    /// `destination`.
    ///
    /// The destination may be a different record type, as long as every
    /// selected field exists on it with a compatible shape and type. Fields
    /// the filter rejects, and fields with reserved names, are left
    /// untouched. Nested records are rebuilt from scratch under the child
    /// filter, so a partially selected nested record loses whatever the
    /// destination held there before.
    ///
    /// # Errors
    ///
    /// Stops at the first failing field. Fields written before the failure
    /// stay written; use [`Copier::apply`] when the destination must be left
    /// unchanged on error.
    pub fn copy(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
        destination: &mut dyn Record,
    ) -> CopyResult<()> {
        self.copy_level(filter, source, destination, 1)
            .inspect_err(trace_copy_failed)
    }

    /// Copies the selected fields of `source` into a new `R`.
    ///
    /// # Errors
    ///
    /// See [`Copier::copy`].
    pub fn project<R: Record + Default>(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
    ) -> CopyResult<R> {
        let mut projected = R::default();
        self.copy(filter, source, &mut projected)?;
        Ok(projected)
    }

    /// Like [`Copier::copy`], but leaves `destination` unchanged when the
    /// copy fails.
    ///
    /// # Errors
    ///
    /// See [`Copier::copy`].
    pub fn apply<R: Record + Clone>(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
        destination: &mut R,
    ) -> CopyResult<()> {
        let mut staged = destination.clone();
        self.copy(filter, source, &mut staged)?;
        *destination = staged;
        Ok(())
    }

    fn copy_level(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
        destination: &mut dyn Record,
        depth: usize,
    ) -> CopyResult<()> {
        for &name in source.field_names() {
            if is_reserved(name) {
                trace_field_skipped(source.record_type(), name, SkipReason::Reserved);
                continue;
            }
            let Some(child) = filter.filter(name) else {
                trace_field_skipped(source.record_type(), name, SkipReason::Filtered);
                continue;
            };
            self.copy_field(child, name, source, destination, depth)?;
        }
        Ok(())
    }

    fn copy_field(
        &self,
        filter: &dyn FieldFilter,
        name: &'static str,
        source: &dyn Record,
        destination: &mut dyn Record,
        depth: usize,
    ) -> CopyResult<()> {
        let source_type = source.record_type();
        let record = destination.record_type();
        let value = source.field(name).ok_or(CopyError::MissingField {
            record: source_type,
            field: name,
        })?;
        let slot = destination
            .field_mut(name)
            .ok_or(CopyError::MissingField {
                record,
                field: name,
            })?;
        let shape = value.shape();
        let mismatch = |mismatch| CopyError::type_mismatch(record, name, mismatch);

        match (value, slot) {
            (FieldRef::Scalar(value), FieldMut::Scalar(slot))
            | (FieldRef::RepeatedScalar(value), FieldMut::RepeatedScalar(slot)) => {
                slot.assign(value.clone_boxed()).map_err(mismatch)?;
            }
            (FieldRef::Nested(value), FieldMut::Nested(slot)) => {
                let copied = match value {
                    Some(inner) => {
                        let mut target = slot.blank();
                        self.descend(filter, record, name, inner, target.as_mut(), depth)?;
                        Some(target)
                    }
                    None => None,
                };
                slot.assign(copied).map_err(mismatch)?;
            }
            (FieldRef::OneOf(value), FieldMut::OneOf(slot)) => {
                let copied = match value {
                    Some(inner) => {
                        if !slot.accepts(inner) {
                            return Err(CopyError::TypeMismatch {
                                record,
                                field: name,
                                expected: slot.expected(),
                                found: inner.record_type(),
                            });
                        }
                        let mut target = inner.fresh();
                        self.descend(filter, record, name, inner, target.as_mut(), depth)?;
                        Some(target)
                    }
                    None => None,
                };
                slot.assign(copied).map_err(mismatch)?;
            }
            (FieldRef::Repeated(items), FieldMut::Repeated(slot)) => {
                let mut copied = Vec::with_capacity(items.len());
                for item in items {
                    let mut target = slot.blank();
                    self.descend(filter, record, name, item, target.as_mut(), depth)?;
                    copied.push(target);
                }
                slot.assign(copied).map_err(mismatch)?;
            }
            (value, slot) => {
                return Err(CopyError::ImmutableField {
                    record,
                    field: name,
                    expected: slot.shape(),
                    found: value.shape(),
                });
            }
        }

        trace_field_copied(source_type, name, shape);
        Ok(())
    }

    fn descend(
        &self,
        filter: &dyn FieldFilter,
        record: &'static str,
        field: &'static str,
        source: &dyn Record,
        target: &mut dyn Record,
        depth: usize,
    ) -> CopyResult<()> {
        if depth >= self.options.max_depth {
            return Err(CopyError::DepthExceeded {
                record,
                field,
                max_depth: self.options.max_depth,
            });
        }
        self.copy_level(filter, source, target, depth + 1)
            .map_err(|source| CopyError::Nested {
                record,
                field,
                source: Box::new(source),
            })
    }
}

/// Copies with default options. See [`Copier::copy`].
///
/// # Errors
///
/// See [`Copier::copy`].
pub fn copy(
    filter: &dyn FieldFilter,
    source: &dyn Record,
    destination: &mut dyn Record,
) -> CopyResult<()> {
    Copier::default().copy(filter, source, destination)
}
