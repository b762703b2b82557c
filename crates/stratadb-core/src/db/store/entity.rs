use derive_more::Display;
use ulid::Ulid;

///
/// EntityId
///
/// Stable identity of a stored entity. Deduplication and identity comparison
/// operate on this, never on full entity values.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntityId(Ulid);

impl EntityId {
    #[must_use]
    pub const fn from_ulid(id: Ulid) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn from_u128(id: u128) -> Self {
        Self(Ulid(id))
    }

    #[must_use]
    pub const fn ulid(&self) -> Ulid {
        self.0
    }
}

///
/// Entity
///
/// A record in the store, typed by its entity kind.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: String,
}

impl Entity {
    #[must_use]
    pub fn new(id: EntityId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}
