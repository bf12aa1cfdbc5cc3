/// Prefix marking a field as internal to its record.
///
/// Fields whose names start with this prefix never take part in a copy,
/// whatever the mask says about them.
pub const RESERVED_PREFIX: &str = "_";

/// Returns `true` when `name` carries the [`RESERVED_PREFIX`].
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Decides which fields of a record participate in a copy.
///
/// `filter` is consulted once per field. It returns `None` when the field is
/// excluded, or the filter that governs the field's own sub-fields when it is
/// included. Filters compose recursively: a copy that descends into a nested
/// record uses the filter returned for that field.
pub trait FieldFilter {
    /// Returns the sub-filter for `name`, or `None` when `name` is excluded.
    fn filter(&self, name: &str) -> Option<&dyn FieldFilter>;

    /// Returns `true` if `name` passes this filter.
    fn includes(&self, name: &str) -> bool {
        self.filter(name).is_some()
    }
}

impl<F: FieldFilter + ?Sized> FieldFilter for &F {
    fn filter(&self, name: &str) -> Option<&dyn FieldFilter> {
        (**self).filter(name)
    }
}
