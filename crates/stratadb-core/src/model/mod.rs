//! Read-only association metadata: entity kinds, their association ends, and
//! directionality. Query nodes consult this model to decide whether a
//! link-existence query can be rewritten as a traversal from the opposite
//! side of a bidirectional association.

mod association;
mod builder;
mod entity;


pub use association::{AssociationEnd, AssociationEndId, AssociationKind, AssociationMetadata};
pub use builder::{ModelBuilder, ModelError};
pub use entity::EntityMetadata;

use std::collections::BTreeMap;

///
/// ModelMetadata
///
/// The full metadata set for one store. Immutable once built; lookups never
/// mutate and the model may be shared across threads without synchronization.
///

#[derive(Clone, Debug, Default)]
pub struct ModelMetadata {
    entities: BTreeMap<String, EntityMetadata>,
}

impl ModelMetadata {
    #[must_use]
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    pub(crate) const fn new(entities: BTreeMap<String, EntityMetadata>) -> Self {
        Self { entities }
    }

    /// Look up the metadata for an entity kind. Absence is not an error; it
    /// drives callers onto their metadata-free path.
    #[must_use]
    pub fn entity(&self, kind: &str) -> Option<&EntityMetadata> {
        self.entities.get(kind)
    }

    /// Iterate all entity kinds in deterministic (sorted) order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityMetadata> {
        self.entities.values()
    }
}
