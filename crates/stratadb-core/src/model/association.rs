use derive_more::Display;
use std::sync::Arc;

///
/// AssociationKind
///
/// Directionality of an association as a whole.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AssociationKind {
    /// One-way link; the target side carries no mirror end.
    Directed,

    /// Two-way link; each end can name its opposite.
    Bidirectional,
}

///
/// AssociationEndId
///
/// Identifies one end of an association by (entity kind, link name).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssociationEndId {
    entity_kind: String,
    link_name: String,
}

impl AssociationEndId {
    pub(crate) fn new(entity_kind: impl Into<String>, link_name: impl Into<String>) -> Self {
        Self {
            entity_kind: entity_kind.into(),
            link_name: link_name.into(),
        }
    }

    #[must_use]
    pub fn entity_kind(&self) -> &str {
        &self.entity_kind
    }

    #[must_use]
    pub fn link_name(&self) -> &str {
        &self.link_name
    }

    fn matches(&self, end: &AssociationEnd) -> bool {
        self.entity_kind == end.entity_kind() && self.link_name == end.link_name()
    }
}

///
/// AssociationMetadata
///
/// Describes one association as a whole: its directionality and the ends it
/// connects. Shared (`Arc`) between the `AssociationEnd`s it describes.
///

#[derive(Debug)]
pub struct AssociationMetadata {
    kind: AssociationKind,
    ends: Vec<AssociationEndId>,
}

impl AssociationMetadata {
    pub(crate) const fn new(kind: AssociationKind, ends: Vec<AssociationEndId>) -> Self {
        Self { kind, ends }
    }

    #[must_use]
    pub const fn kind(&self) -> AssociationKind {
        self.kind
    }

    #[must_use]
    pub fn ends(&self) -> &[AssociationEndId] {
        &self.ends
    }

    /// Resolve the end opposite to `end`. Returns `None` for directed
    /// associations and for ends that do not belong to this association.
    /// A symmetric self-association resolves to its own identifier.
    #[must_use]
    pub fn opposite_end(&self, end: &AssociationEnd) -> Option<&AssociationEndId> {
        match self.ends.as_slice() {
            [a, b] if a.matches(end) => Some(b),
            [a, b] if b.matches(end) => Some(a),
            _ => None,
        }
    }
}

///
/// AssociationEnd
///
/// One side of an association, owned by the `EntityMetadata` it is declared
/// on and looked up by link name. Never mutated after the model is built.
///

#[derive(Clone, Debug)]
pub struct AssociationEnd {
    entity_kind: String,
    link_name: String,
    opposite_kind: String,
    association: Arc<AssociationMetadata>,
}

impl AssociationEnd {
    pub(crate) fn new(
        entity_kind: impl Into<String>,
        link_name: impl Into<String>,
        opposite_kind: impl Into<String>,
        association: Arc<AssociationMetadata>,
    ) -> Self {
        Self {
            entity_kind: entity_kind.into(),
            link_name: link_name.into(),
            opposite_kind: opposite_kind.into(),
            association,
        }
    }

    #[must_use]
    pub fn entity_kind(&self) -> &str {
        &self.entity_kind
    }

    #[must_use]
    pub fn link_name(&self) -> &str {
        &self.link_name
    }

    /// Kind of the entity on the other side of this end's link.
    #[must_use]
    pub fn opposite_kind(&self) -> &str {
        &self.opposite_kind
    }

    #[must_use]
    pub fn association(&self) -> &AssociationMetadata {
        &self.association
    }
}
