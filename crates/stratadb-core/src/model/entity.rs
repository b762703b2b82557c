use crate::model::association::AssociationEnd;
use std::collections::BTreeMap;

///
/// EntityMetadata
///
/// Per-kind metadata: whether the kind has sub-types (specializations) and
/// the association ends declared on it, keyed by link name.
///

#[derive(Clone, Debug)]
pub struct EntityMetadata {
    kind: String,
    has_sub_types: bool,
    ends: BTreeMap<String, AssociationEnd>,
}

impl EntityMetadata {
    pub(crate) fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            has_sub_types: false,
            ends: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// True if this kind has specializations. Sub-typed kinds may carry
    /// inherited association ends invisible to a simple lookup on the base
    /// kind, which makes opposite-side query rewrites unsound.
    #[must_use]
    pub const fn has_sub_types(&self) -> bool {
        self.has_sub_types
    }

    /// Look up an association end by link name. Absence is not an error.
    #[must_use]
    pub fn association_end(&self, link_name: &str) -> Option<&AssociationEnd> {
        self.ends.get(link_name)
    }

    /// Iterate the declared ends in deterministic (sorted) order.
    pub fn association_ends(&self) -> impl Iterator<Item = &AssociationEnd> {
        self.ends.values()
    }

    pub(crate) const fn mark_sub_types(&mut self) {
        self.has_sub_types = true;
    }

    /// Insert an end; returns false if the link name is already taken.
    pub(crate) fn insert_end(&mut self, end: AssociationEnd) -> bool {
        match self.ends.entry(end.link_name().to_owned()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(end);
                true
            }
        }
    }
}
