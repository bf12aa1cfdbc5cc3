//! crates/structcopy/src/error.rs
//!
//! Error type for structural copies.

use thiserror::Error;

use crate::record::{Mismatch, Shape};

/// Result alias for copy operations.
pub type CopyResult<T> = Result<T, CopyError>;

/// Reasons a copy can fail.
///
/// Every variant names the record type and field where the failure was
/// detected. Failures inside nested records arrive wrapped in
/// [`CopyError::Nested`], one layer per level, so the full path to the
/// offending field can be recovered with [`CopyError::field_path`].
#[derive(Debug, Error)]
pub enum CopyError {
    /// A selected field does not exist on the source or destination type.
    #[error("{record} has no field named {field}")]
    MissingField {
        /// Record type that lacks the field.
        record: &'static str,
        /// Field name.
        field: &'static str,
    },

    /// The destination field cannot hold a value of the source's shape.
    #[error("field {field} of {record} is a {expected} and cannot be written from a {found}")]
    ImmutableField {
        /// Destination record type.
        record: &'static str,
        /// Field name.
        field: &'static str,
        /// Shape of the destination field.
        expected: Shape,
        /// Shape of the source field.
        found: Shape,
    },

    /// The destination field's type does not accept the source value.
    #[error("field {field} of {record} expects {expected} but the source holds {found}")]
    TypeMismatch {
        /// Destination record type.
        record: &'static str,
        /// Field name.
        field: &'static str,
        /// Type the destination accepts.
        expected: &'static str,
        /// Type the source provided.
        found: &'static str,
    },

    /// Records are nested deeper than the configured limit.
    #[error("field {field} of {record} is nested deeper than {max_depth} levels")]
    DepthExceeded {
        /// Record type holding the field.
        record: &'static str,
        /// Field name.
        field: &'static str,
        /// Configured limit.
        max_depth: usize,
    },

    /// A scalar value could not be rendered as a map value.
    #[error("cannot encode field {field} of {record}: {source}")]
    Encode {
        /// Source record type.
        record: &'static str,
        /// Field name.
        field: &'static str,
        /// Underlying encoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Copying a nested record failed.
    #[error("field {field} of {record}: {source}")]
    Nested {
        /// Record type holding the nested field.
        record: &'static str,
        /// Field name.
        field: &'static str,
        /// Failure inside the nested record.
        #[source]
        source: Box<CopyError>,
    },
}

impl CopyError {
    pub(crate) const fn type_mismatch(
        record: &'static str,
        field: &'static str,
        mismatch: Mismatch,
    ) -> Self {
        Self::TypeMismatch {
            record,
            field,
            expected: mismatch.expected,
            found: mismatch.found,
        }
    }

    /// Record type at which this layer of the error was raised.
    #[must_use]
    pub const fn record(&self) -> &'static str {
        match self {
            Self::MissingField { record, .. }
            | Self::ImmutableField { record, .. }
            | Self::TypeMismatch { record, .. }
            | Self::DepthExceeded { record, .. }
            | Self::Encode { record, .. }
            | Self::Nested { record, .. } => *record,
        }
    }

    /// Field at which this layer of the error was raised.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::ImmutableField { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::DepthExceeded { field, .. }
            | Self::Encode { field, .. }
            | Self::Nested { field, .. } => *field,
        }
    }

    /// Dotted path from the top-level record to the failing field.
    #[must_use]
    pub fn field_path(&self) -> String {
        let mut path = String::from(self.field());
        let mut current = self;
        while let Self::Nested { source, .. } = current {
            current = &**source;
            path.push('.');
            path.push_str(current.field());
        }
        path
    }

    /// Innermost error, with all [`CopyError::Nested`] layers removed.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Nested { source, .. } = current {
            current = &**source;
        }
        current
    }
}
