//! Transactional store contract consumed by query nodes. The storage engine
//! itself lives behind these traits; this crate only issues link-existence
//! queries against whatever transaction the store currently holds.

mod entity;
mod iterable;


pub use entity::{Entity, EntityId};
pub use iterable::EntityIterable;

use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("no active transaction")]
    NoActiveTransaction,
}

///
/// PersistentStore
///
/// Store handle reachable from the query engine.
///

pub trait PersistentStore {
    /// The store's current consistent read context. Fails when no valid
    /// transaction is active; the failure propagates to the caller unchanged.
    fn current_transaction(&self) -> Result<&dyn StoreTransaction, StoreError>;
}

///
/// StoreTransaction
///
/// Read surface of one transaction. All results are raw: they may contain
/// duplicates (multi-valued links) and must be passed through
/// [`EntityIterable::distinct`] before reaching downstream consumers.
///
/// Returned iterables borrow the transaction; enumeration past the
/// transaction's lifetime is ruled out by construction.
///

pub trait StoreTransaction {
    /// Every entity of `entity_kind`.
    fn all<'t>(&'t self, entity_kind: &str) -> EntityIterable<'t>;

    /// Entities of `entity_kind` with a non-null `link_name` link.
    fn find_with_links<'t>(&'t self, entity_kind: &str, link_name: &str) -> EntityIterable<'t>;

    /// Entities of `entity_kind` with a non-null `link_name` link whose
    /// target is of `opposite_kind` and links back via `opposite_link_name`.
    /// Narrows the scan using both ends of a bidirectional association.
    fn find_with_links_to<'t>(
        &'t self,
        entity_kind: &str,
        link_name: &str,
        opposite_kind: &str,
        opposite_link_name: &str,
    ) -> EntityIterable<'t>;
}
