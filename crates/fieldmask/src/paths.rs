//! Builds inclusion masks from dotted field paths.
//!
//! This is the form carried by partial-update requests: an ordered list such
//! as `["name", "address.city"]`. Paths sharing a prefix merge into a single
//! subtree.

use std::collections::BTreeMap;

use crate::debug_mask::{MaskSource, trace_mask_built, trace_mask_rejected};
use crate::mask::merge_inclusion_entry;
use crate::{DEFAULT_MAX_DEPTH, FormatError, Mask, ParseOptions, ParseResult};

impl Mask {
    /// Builds an inclusion mask from dotted paths, passing each segment
    /// through `naming` before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EmptySegment`] when a path has a leading,
    /// trailing, or doubled `.`, and [`FormatError::DepthExceeded`] when a path
    /// has more than [`DEFAULT_MAX_DEPTH`] segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldmask::{Mask, naming::to_snake_case};
    ///
    /// let mask = Mask::from_paths(["displayName", "address.postCode"], to_snake_case).unwrap();
    /// assert_eq!(mask.to_string(), "address{post_code},display_name");
    /// ```
    pub fn from_paths<I, S, F>(paths: I, naming: F) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        build(paths, naming, DEFAULT_MAX_DEPTH)
    }

    /// Builds an inclusion mask from dotted paths using `options` for the
    /// naming convention and nesting limit.
    ///
    /// # Errors
    ///
    /// See [`Mask::from_paths`].
    pub fn from_paths_with<I, S>(paths: I, options: &ParseOptions) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let style = options.naming;
        build(paths, |segment| style.apply(segment), options.max_depth)
    }
}

fn build<I, S, F>(paths: I, naming: F, max_depth: usize) -> ParseResult<Mask>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut root = BTreeMap::new();
    for path in paths {
        if let Err(error) = insert_path(&mut root, path.as_ref(), &naming, max_depth) {
            trace_mask_rejected(MaskSource::Paths, &error);
            return Err(error);
        }
    }
    let mask = Mask::Inclusion(root);
    trace_mask_built(MaskSource::Paths, &mask);
    Ok(mask)
}

fn insert_path<F>(
    root: &mut BTreeMap<String, Mask>,
    path: &str,
    naming: &F,
    max_depth: usize,
) -> ParseResult<()>
where
    F: Fn(&str) -> String,
{
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(FormatError::EmptySegment {
            path: path.to_owned(),
        });
    }
    if segments.len() > max_depth {
        return Err(FormatError::DepthExceeded { max_depth });
    }

    let mut names = segments.into_iter().rev().map(|segment| naming(segment));
    let Some(leaf) = names.next() else {
        return Ok(());
    };
    let (name, subtree) = names.fold((leaf, Mask::all()), |(inner, subtree), outer| {
        let mut level = BTreeMap::new();
        level.insert(inner, subtree);
        (outer, Mask::Inclusion(level))
    });
    merge_inclusion_entry(root, name, subtree);
    Ok(())
}
