#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `structcopy` copies the fields of one record into another record, or into
//! a `serde_json` map, keeping only the fields a
//! [`FieldFilter`](fieldmask::FieldFilter) selects. It is the projection half
//! of a partial-update pipeline: the request carries a mask, and the engine
//! writes exactly the named fields and sub-fields.
//!
//! # Design
//!
//! - [`Record`] is the accessor capability. A record lists its field names
//!   and hands out typed read and write views ([`FieldRef`], [`FieldMut`])
//!   so the engine never touches concrete field types. [`impl_record!`] and
//!   [`impl_one_of!`] generate it for plain structs and enums.
//! - Each field has a [`Shape`]: scalars and repeated scalars are cloned
//!   whole; nested, one-of and repeated records are rebuilt level by level
//!   under the child filter.
//! - [`Copier`] walks source fields in declaration order and dispatches on
//!   shape. [`Copier::copy_to_map`] renders the same walk as dynamically
//!   typed values.
//!
//! # Invariants
//!
//! - Fields whose names carry the reserved prefix (`_`) are never read or
//!   written.
//! - A nested record in the destination is replaced, never merged: the copy
//!   starts from a default-valued record and fills only selected sub-fields.
//! - A one-of field receives a record of the same concrete type as the
//!   source value, provided the destination enum has a variant for it.
//! - Recursion is bounded by [`CopyOptions::max_depth`].
//!
//! # Errors
//!
//! The first failing field aborts the copy with a [`CopyError`] naming the
//! record type and field. Errors from nested levels are wrapped once per
//! level; [`CopyError::field_path`] rebuilds the dotted path. Fields written
//! before the failure remain written, except through [`Copier::apply`].
//!
//! # Examples
//!
//! ```
//! use fieldmask::Mask;
//! use structcopy::impl_record;
//!
//! #[derive(Debug, Default)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! #[derive(Debug, Default)]
//! struct Shape {
//!     name: String,
//!     origin: Option<Point>,
//! }
//!
//! impl_record!(Point { scalar x, scalar y });
//! impl_record!(Shape { scalar name, nested origin });
//!
//! let source = Shape {
//!     name: "square".to_owned(),
//!     origin: Some(Point { x: 1, y: 2 }),
//! };
//! let mask: Mask = "origin{x}".parse().unwrap();
//!
//! let mut destination = Shape::default();
//! structcopy::copy(&mask, &source, &mut destination).unwrap();
//! assert_eq!(destination.name, "");
//! assert_eq!(destination.origin.as_ref().map(|p| (p.x, p.y)), Some((1, 0)));
//!
//! let map = structcopy::Copier::default().to_map(&mask, &source).unwrap();
//! assert_eq!(serde_json::Value::Object(map), serde_json::json!({"origin": {"x": 1}}));
//! ```
//!
//! # See also
//!
//! - `fieldmask` for building masks from paths or compact text.

mod copier;
mod debug_copy;
mod error;
mod macros;
mod options;
mod record;
mod to_map;

pub use copier::{Copier, copy};
pub use error::{CopyError, CopyResult};
pub use options::{CopyOptions, DEFAULT_MAX_DEPTH};
pub use record::{
    Embedded, FieldMut, FieldRef, Mismatch, NestedSlot, OneOf, OneOfSlot, Record, RepeatedSlot,
    ScalarValue, Shape, downcast_record,
};
pub use to_map::copy_to_map;
