//! crates/structcopy/src/to_map.rs
//!
//! Record-to-map copy.

use fieldmask::{FieldFilter, is_reserved};
use serde_json::{Map, Value};

use crate::copier::Copier;
use crate::debug_copy::{SkipReason, trace_copy_failed, trace_field_copied, trace_field_skipped};
use crate::error::{CopyError, CopyResult};
use crate::record::{FieldRef, Record};

impl Copier {
    /// Writes the fields of `source` selected by `filter` into `destination`
    /// as dynamically-typed values.
    ///
    /// Scalars become their JSON rendering. Nested and one-of records become
    /// objects, or [`Value::Null`] when absent. Repeated records become
    /// arrays of objects. Keys already in `destination` that the filter
    /// selects are overwritten; other keys are kept.
    ///
    /// [`Map`] keeps its keys sorted by name, so iteration order follows the
    /// field names rather than the order the record declares them in.
    ///
    /// # Errors
    ///
    /// Fails with [`CopyError::Encode`] when a scalar cannot be rendered and
    /// with [`CopyError::DepthExceeded`] when records nest too deeply. Keys
    /// written before the failure stay written.
    pub fn copy_to_map(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
        destination: &mut Map<String, Value>,
    ) -> CopyResult<()> {
        self.map_level(filter, source, destination, 1)
            .inspect_err(trace_copy_failed)
    }

    /// Renders the selected fields of `source` into a new map.
    ///
    /// # Errors
    ///
    /// See [`Copier::copy_to_map`].
    pub fn to_map(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
    ) -> CopyResult<Map<String, Value>> {
        let mut map = Map::new();
        self.copy_to_map(filter, source, &mut map)?;
        Ok(map)
    }

    fn map_level(
        &self,
        filter: &dyn FieldFilter,
        source: &dyn Record,
        destination: &mut Map<String, Value>,
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
            let value = self.map_field(child, name, source, depth)?;
            destination.insert(name.to_owned(), value);
        }
        Ok(())
    }

    fn map_field(
        &self,
        filter: &dyn FieldFilter,
        name: &'static str,
        source: &dyn Record,
        depth: usize,
    ) -> CopyResult<Value> {
        let record = source.record_type();
        let value = source.field(name).ok_or(CopyError::MissingField {
            record,
            field: name,
        })?;
        let shape = value.shape();

        let rendered = match value {
            FieldRef::Scalar(value) | FieldRef::RepeatedScalar(value) => {
                value.to_json().map_err(|source| CopyError::Encode {
                    record,
                    field: name,
                    source,
                })?
            }
            FieldRef::Nested(None) | FieldRef::OneOf(None) => Value::Null,
            FieldRef::Nested(Some(inner)) | FieldRef::OneOf(Some(inner)) => {
                Value::Object(self.descend_map(filter, record, name, inner, depth)?)
            }
            FieldRef::Repeated(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| {
                        self.descend_map(filter, record, name, item, depth)
                            .map(Value::Object)
                    })
                    .collect::<CopyResult<_>>()?,
            ),
        };

        trace_field_copied(record, name, shape);
        Ok(rendered)
    }

    fn descend_map(
        &self,
        filter: &dyn FieldFilter,
        record: &'static str,
        field: &'static str,
        source: &dyn Record,
        depth: usize,
    ) -> CopyResult<Map<String, Value>> {
        let max_depth = self.options().max_depth;
        if depth >= max_depth {
            return Err(CopyError::DepthExceeded {
                record,
                field,
                max_depth,
            });
        }
        let mut map = Map::new();
        self.map_level(filter, source, &mut map, depth + 1)
            .map_err(|source| CopyError::Nested {
                record,
                field,
                source: Box::new(source),
            })?;
        Ok(map)
    }
}

/// Writes into a map with default options. See [`Copier::copy_to_map`].
///
/// # Errors
///
/// See [`Copier::copy_to_map`].
pub fn copy_to_map(
    filter: &dyn FieldFilter,
    source: &dyn Record,
    destination: &mut Map<String, Value>,
) -> CopyResult<()> {
    Copier::default().copy_to_map(filter, source, destination)
}
