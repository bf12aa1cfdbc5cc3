use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::filter::{FieldFilter, is_reserved};

static EMPTY_INCLUSION: Mask = Mask::Inclusion(BTreeMap::new());
static EMPTY_EXCLUSION: Mask = Mask::Exclusion(BTreeMap::new());

/// Tree of field names describing which fields take part in a copy.
///
/// Each level maps a field name to the mask governing that field's own
/// sub-fields. The two variants read the map in opposite ways:
///
/// - **Inclusion**: only listed names pass. An empty level is a wildcard
///   that passes every field with an empty child mask.
/// - **Exclusion**: every name passes except those listed. A name mapped to
///   `None` is excluded outright; a name mapped to `Some(mask)` passes and
///   recurses with `mask`.
///
/// Names carrying the [`RESERVED_PREFIX`](crate::RESERVED_PREFIX) are
/// rejected by both variants before the map is consulted.
///
/// Masks are immutable once built and can be shared freely between
/// concurrent copies.
///
/// # Examples
///
/// ```
/// use fieldmask::Mask;
///
/// let mask: Mask = "name,address{city}".parse().unwrap();
///
/// assert!(mask.contains_path("name"));
/// assert!(mask.contains_path("address.city"));
/// assert!(!mask.contains_path("address.street"));
/// assert!(!mask.contains_path("email"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mask {
    /// Only the listed fields pass; empty means every field passes.
    Inclusion(BTreeMap<String, Mask>),
    /// Every field passes except those listed; `None` excludes the whole field.
    Exclusion(BTreeMap<String, Option<Mask>>),
}

impl Default for Mask {
    fn default() -> Self {
        Self::all()
    }
}

impl Mask {
    /// Returns the wildcard mask that passes every non-reserved field at
    /// every depth.
    #[must_use]
    pub const fn all() -> Self {
        Self::Inclusion(BTreeMap::new())
    }

    /// Builds an exclusion mask that drops each of `names` entirely and passes
    /// everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldmask::Mask;
    ///
    /// let mask = Mask::exclude_fields(["password"]);
    /// assert!(mask.contains_path("login"));
    /// assert!(!mask.contains_path("password"));
    /// ```
    #[must_use]
    pub fn exclude_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclusion(names.into_iter().map(|name| (name.into(), None)).collect())
    }

    /// Returns the mask governing the sub-fields of `name`, or `None` when
    /// `name` is excluded at this level.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        if is_reserved(name) {
            return None;
        }
        match self {
            Self::Inclusion(fields) if fields.is_empty() => Some(&EMPTY_INCLUSION),
            Self::Inclusion(fields) => fields.get(name),
            Self::Exclusion(fields) => match fields.get(name) {
                None => Some(&EMPTY_EXCLUSION),
                Some(Some(sub)) => Some(sub),
                Some(None) => None,
            },
        }
    }

    /// Evaluates a dotted path such as `address.city` level by level.
    ///
    /// Returns `false` for paths with empty segments.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        path.split('.')
            .try_fold(self, |mask, segment| {
                if segment.is_empty() {
                    None
                } else {
                    mask.child(segment)
                }
            })
            .is_some()
    }

    /// Returns `true` for an inclusion mask.
    #[must_use]
    pub const fn is_inclusion(&self) -> bool {
        matches!(self, Self::Inclusion(_))
    }

    /// Returns `true` for an exclusion mask.
    #[must_use]
    pub const fn is_exclusion(&self) -> bool {
        matches!(self, Self::Exclusion(_))
    }

    /// Returns `true` when this level lists no field names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of field names listed at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Inclusion(fields) => fields.len(),
            Self::Exclusion(fields) => fields.len(),
        }
    }

    /// Number of populated levels: `0` for an empty mask, `1` for a flat list,
    /// `2` for `a{b}` and so on.
    #[must_use]
    pub fn depth(&self) -> usize {
        let deepest = match self {
            Self::Inclusion(fields) => fields.values().map(Self::depth).max(),
            Self::Exclusion(fields) => fields.values().flatten().map(Self::depth).max(),
        };
        match deepest {
            Some(depth) => depth + 1,
            None => 0,
        }
    }

    /// Total number of field names listed across every level.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Inclusion(fields) => {
                fields.len() + fields.values().map(Self::node_count).sum::<usize>()
            }
            Self::Exclusion(fields) => {
                fields.len() + fields.values().flatten().map(Self::node_count).sum::<usize>()
            }
        }
    }

    /// Returns `true` when every non-reserved path below this level passes.
    ///
    /// That is the empty inclusion, and any exclusion whose entries all carry
    /// a sub-mask that itself passes everything.
    #[must_use]
    pub fn passes_all(&self) -> bool {
        match self {
            Self::Inclusion(fields) => fields.is_empty(),
            Self::Exclusion(fields) => fields
                .values()
                .all(|child| child.as_ref().is_some_and(Self::passes_all)),
        }
    }

    /// Returns the complement of this mask over leaf paths.
    ///
    /// A child that passes everything becomes an exclude-everything entry and
    /// a child with a narrower sub-mask becomes an entry carrying the inverted
    /// sub-mask, and vice versa. For every path that ends on a leaf, or leaves
    /// the mask's tree, exactly one of `m` and `m.invert()` passes it. Paths
    /// ending on an interior node pass both: `a{b}` and `!a{b}` each pass `a`.
    ///
    /// A mask that passes everything has no complement: it inverts to another
    /// mask that passes everything.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::Inclusion(fields) => Self::Exclusion(
                fields
                    .iter()
                    .map(|(name, child)| {
                        let inverted = (!child.passes_all()).then(|| child.invert());
                        (name.clone(), inverted)
                    })
                    .collect(),
            ),
            Self::Exclusion(fields) => Self::Inclusion(
                fields
                    .iter()
                    .filter_map(|(name, child)| match child {
                        None => Some((name.clone(), Self::all())),
                        Some(child) if child.passes_all() => None,
                        Some(child) => Some((name.clone(), child.invert())),
                    })
                    .collect(),
            ),
        }
    }

    /// Merges `other` into this mask.
    ///
    /// Two inclusion masks merge by union: a name present in either passes,
    /// and shared names merge their children the same way. Two exclusion
    /// masks merge so that a field excluded outright by either side stays
    /// excluded. When the kinds differ, `other` replaces this mask.
    pub fn merge(&mut self, other: Self) {
        match (self, other) {
            (Self::Inclusion(ours), Self::Inclusion(theirs)) => {
                for (name, child) in theirs {
                    merge_inclusion_entry(ours, name, child);
                }
            }
            (Self::Exclusion(ours), Self::Exclusion(theirs)) => {
                for (name, child) in theirs {
                    match ours.entry(name) {
                        Entry::Vacant(slot) => {
                            slot.insert(child);
                        }
                        Entry::Occupied(mut slot) => match (slot.get_mut(), child) {
                            (Some(existing), Some(child)) => existing.merge(child),
                            (existing, _) => *existing = None,
                        },
                    }
                }
            }
            (ours, other) => *ours = other,
        }
    }

    /// Flattens the mask into dotted paths, in field-name order.
    ///
    /// Every path ends at an inclusion leaf or an exclude-everything entry.
    /// For an inclusion mask built by [`Mask::from_paths`] with identity
    /// naming this reproduces the (deduplicated) input paths.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(self, &mut String::new(), &mut out);
        out
    }
}

pub(crate) fn merge_inclusion_entry(fields: &mut BTreeMap<String, Mask>, name: String, child: Mask) {
    match fields.entry(name) {
        Entry::Vacant(slot) => {
            slot.insert(child);
        }
        Entry::Occupied(mut slot) => slot.get_mut().merge(child),
    }
}

fn collect_paths(mask: &Mask, prefix: &mut String, out: &mut Vec<String>) {
    match mask {
        Mask::Inclusion(fields) => {
            for (name, child) in fields {
                visit_path(name, Some(child), prefix, out);
            }
        }
        Mask::Exclusion(fields) => {
            for (name, child) in fields {
                visit_path(name, child.as_ref(), prefix, out);
            }
        }
    }
}

fn visit_path(name: &str, child: Option<&Mask>, prefix: &mut String, out: &mut Vec<String>) {
    let restore = prefix.len();
    if !prefix.is_empty() {
        prefix.push('.');
    }
    prefix.push_str(name);
    match child {
        Some(child) if !child.is_empty() => collect_paths(child, prefix, out),
        _ => out.push(prefix.clone()),
    }
    prefix.truncate(restore);
}

impl FieldFilter for Mask {
    fn filter(&self, name: &str) -> Option<&dyn FieldFilter> {
        self.child(name).map(|mask| mask as &dyn FieldFilter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> Mask {
        Mask::all()
    }

    fn inclusion<const N: usize>(entries: [(&str, Mask); N]) -> Mask {
        Mask::Inclusion(
            entries
                .into_iter()
                .map(|(name, child)| (name.to_owned(), child))
                .collect(),
        )
    }

    fn exclusion<const N: usize>(entries: [(&str, Option<Mask>); N]) -> Mask {
        Mask::Exclusion(
            entries
                .into_iter()
                .map(|(name, child)| (name.to_owned(), child))
                .collect(),
        )
    }

    #[test]
    fn empty_inclusion_is_wildcard() {
        let mask = Mask::all();
        let child = mask.child("anything").expect("wildcard passes");
        assert!(child.is_inclusion());
        assert!(child.is_empty());
    }

    #[test]
    fn inclusion_passes_only_listed_names() {
        let mask = inclusion([("a", leaf())]);
        assert!(mask.child("a").is_some());
        assert!(mask.child("b").is_none());
    }

    #[test]
    fn exclusion_default_passes_with_empty_exclusion_child() {
        let mask = exclusion([("secret", None)]);
        let child = mask.child("other").expect("absent names pass");
        assert!(child.is_exclusion());
        assert!(child.is_empty());
    }

    #[test]
    fn exclusion_with_sub_mask_recurses() {
        let mask = exclusion([("profile", Some(exclusion([("ssn", None)])))]);
        let child = mask.child("profile").expect("profile passes");
        assert!(child.child("name").is_some());
        assert!(child.child("ssn").is_none());
    }

    #[test]
    fn exclusion_none_entry_fails() {
        let mask = exclusion([("secret", None)]);
        assert!(mask.child("secret").is_none());
    }

    #[test]
    fn reserved_names_rejected_by_every_variant() {
        assert!(Mask::all().child("_internal").is_none());
        assert!(inclusion([("_internal", leaf())]).child("_internal").is_none());
        assert!(Mask::Exclusion(BTreeMap::new()).child("_internal").is_none());
        assert!(
            exclusion([("_internal", Some(Mask::all()))])
                .child("_internal")
                .is_none()
        );
    }

    #[test]
    fn contains_path_walks_levels() {
        let mask = inclusion([("b", inclusion([("c", leaf())]))]);
        assert!(mask.contains_path("b"));
        assert!(mask.contains_path("b.c"));
        assert!(mask.contains_path("b.c.anything"));
        assert!(!mask.contains_path("b.d"));
        assert!(!mask.contains_path("b..c"));
        assert!(!mask.contains_path(""));
    }

    #[test]
    fn depth_and_node_count() {
        let mask = inclusion([("a", leaf()), ("c", inclusion([("d", leaf())]))]);
        assert_eq!(mask.depth(), 2);
        assert_eq!(mask.node_count(), 3);
        assert_eq!(mask.len(), 2);
        assert_eq!(Mask::all().depth(), 0);
        assert_eq!(Mask::all().node_count(), 0);
    }

    #[test]
    fn invert_swaps_leaves_and_exclusions() {
        let mask = inclusion([("a", leaf()), ("b", inclusion([("c", leaf())]))]);
        let inverted = mask.invert();

        assert_eq!(
            inverted,
            exclusion([("a", None), ("b", Some(exclusion([("c", None)])))])
        );
        assert_eq!(inverted.invert(), mask);
    }

    #[test]
    fn passes_all_sees_through_pass_through_exclusions() {
        assert!(Mask::all().passes_all());
        assert!(exclusion([]).passes_all());
        assert!(exclusion([("a", Some(exclusion([])))]).passes_all());
        assert!(exclusion([("a", Some(leaf()))]).passes_all());
        assert!(!exclusion([("a", None)]).passes_all());
        assert!(!inclusion([("a", leaf())]).passes_all());
    }

    #[test]
    fn invert_excludes_child_given_as_empty_exclusion() {
        let mask = inclusion([("a", exclusion([]))]);
        assert!(mask.contains_path("a.x"));

        let inverted = mask.invert();
        assert_eq!(inverted, exclusion([("a", None)]));
        assert!(!inverted.contains_path("a.x"));
        assert!(inverted.contains_path("z"));
    }

    #[test]
    fn invert_drops_pass_through_exclusion_entries() {
        let mask = exclusion([("a", Some(leaf())), ("b", None)]);
        assert_eq!(mask.invert(), inclusion([("b", leaf())]));
        assert!(!mask.invert().contains_path("a.x"));
    }

    #[test]
    fn invert_complements_below_interior_nodes() {
        let mask = inclusion([("a", inclusion([("b", leaf())]))]);
        let inverted = mask.invert();

        // Interior node: both sides pass it.
        assert!(mask.contains_path("a"));
        assert!(inverted.contains_path("a"));

        assert!(mask.contains_path("a.b"));
        assert!(!inverted.contains_path("a.b"));
        assert!(!mask.contains_path("a.c"));
        assert!(inverted.contains_path("a.c"));
    }

    #[test]
    fn merge_inclusion_unions_children() {
        let mut mask = inclusion([("a", inclusion([("x", leaf())]))]);
        mask.merge(inclusion([("a", inclusion([("y", leaf())])), ("b", leaf())]));

        assert_eq!(
            mask,
            inclusion([
                ("a", inclusion([("x", leaf()), ("y", leaf())])),
                ("b", leaf()),
            ])
        );
    }

    #[test]
    fn merge_exclusion_keeps_outright_exclusion() {
        let mut mask = exclusion([("a", Some(exclusion([("x", None)])))]);
        mask.merge(exclusion([("a", None)]));
        assert_eq!(mask, exclusion([("a", None)]));
    }

    #[test]
    fn merge_of_different_kinds_takes_other() {
        let mut mask = inclusion([("a", leaf())]);
        mask.merge(exclusion([("b", None)]));
        assert_eq!(mask, exclusion([("b", None)]));
    }

    #[test]
    fn paths_flatten_in_name_order() {
        let mask = inclusion([
            ("b", inclusion([("d", leaf()), ("c", leaf())])),
            ("a", leaf()),
        ]);
        assert_eq!(mask.paths(), vec!["a", "b.c", "b.d"]);
    }

    #[test]
    fn field_filter_impl_matches_child() {
        let mask = inclusion([("a", leaf())]);
        let filter: &dyn FieldFilter = &mask;
        assert!(filter.includes("a"));
        assert!(!filter.includes("b"));
        assert!(filter.filter("a").expect("a passes").includes("deeper"));
    }
}
