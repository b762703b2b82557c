use crate::db::store::{Entity, EntityId};
use std::{collections::HashSet, fmt};

///
/// EntityIterable
///
/// Pull-based, lazy sequence of entities borrowed from a transaction. A
/// fresh instantiation is required for each traversal; the sequence is not
/// restartable. `distinct` is the terminal stage every query result passes
/// through before reaching downstream consumers.
///

pub struct EntityIterable<'t> {
    iter: Box<dyn Iterator<Item = Entity> + 't>,
}

impl<'t> EntityIterable<'t> {
    pub fn new(iter: impl Iterator<Item = Entity> + 't) -> Self {
        Self {
            iter: Box::new(iter),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Drop every entity whose identity has already been yielded. Buffers
    /// seen identities only, not full values, and stays lazy.
    #[must_use]
    pub fn distinct(self) -> Self {
        let mut seen: HashSet<EntityId> = HashSet::new();

        Self::new(self.iter.filter(move |entity| seen.insert(entity.id())))
    }
}

impl Iterator for EntityIterable<'_> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        self.iter.next()
    }
}

impl fmt::Debug for EntityIterable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntityIterable(..)")
    }
}
