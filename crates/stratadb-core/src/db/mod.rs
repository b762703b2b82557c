//! Query execution surface: the engine handle, the transactional store
//! contract, and the filter-tree query nodes.

pub mod engine;
pub mod query;
pub mod store;

pub use engine::{EngineError, QueryEngine};
pub use query::{
    All, FilterNode, LinkNotNull, NodeHandle, PlanFingerprint, StrictValueEq, ValueEq,
    WildcardValueEq,
};
pub use store::{Entity, EntityId, EntityIterable, PersistentStore, StoreError, StoreTransaction};
