#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fieldmask` describes which fields of a record take part in a partial
//! update. A [`Mask`] is a tree of field names: a client names only the
//! fields it wants written or returned, nested sub-fields included, and the
//! copy engine in the `structcopy` crate projects exactly those fields.
//!
//! # Design
//!
//! - [`FieldFilter`] is the capability the copy engine consumes. Given a
//!   field name it answers whether the field passes and which filter governs
//!   the field's own sub-fields.
//! - [`Mask`] is the tree implementation, with an inclusion variant (only
//!   listed names pass; an empty level passes everything) and an exclusion
//!   variant (everything passes except listed names).
//! - [`Mask::from_paths`] builds an inclusion mask from the dotted paths
//!   carried by partial-update requests, normalising each segment through a
//!   caller-supplied naming function or a [`NameStyle`].
//! - [`Mask::parse`] reads the compact text form `a,b{c,d{e}}`, and the
//!   [`Display`](std::fmt::Display) impl writes it back in canonical order.
//!
//! # Invariants
//!
//! - Names starting with [`RESERVED_PREFIX`] never pass, whatever the mask
//!   lists.
//! - Masks are immutable after construction. Sharing one mask between any
//!   number of concurrent copies needs no synchronisation.
//! - Rendering is deterministic: siblings are written in field-name order, so
//!   `parse(render(m)) == m` and a second parse/render pass is stable.
//! - Nesting is bounded by [`ParseOptions::max_depth`]; deeper input is
//!   rejected instead of recursing without limit.
//!
//! # Errors
//!
//! Malformed input yields a [`FormatError`] naming the offending path or the
//! byte offset in the mask text. Parsing never panics on malformed input.
//!
//! # Examples
//!
//! ```
//! use fieldmask::{FieldFilter, Mask};
//!
//! let mask = Mask::from_paths(["a", "b.c"], str::to_owned).unwrap();
//!
//! let b = mask.filter("b").expect("b is listed");
//! assert!(b.includes("c"));
//! assert!(!b.includes("d"));
//! assert!(!mask.includes("z"));
//!
//! assert_eq!(mask.to_string(), "a,b{c}");
//! ```
//!
//! # See also
//!
//! - `structcopy` for the copy engine that consumes [`FieldFilter`].

mod compact;
mod debug_mask;
mod display;
mod error;
mod filter;
mod mask;
pub mod naming;
mod options;
mod paths;

pub use error::{FormatError, ParseResult};
pub use filter::{FieldFilter, RESERVED_PREFIX, is_reserved};
pub use mask::Mask;
pub use naming::NameStyle;
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
