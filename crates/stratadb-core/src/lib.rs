//! Core runtime for StrataDB: association metadata, the transactional store
//! surface, filter-tree query nodes, and the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

pub mod db;
pub mod error;
pub mod model;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            engine::QueryEngine,
            query::{All, FilterNode, LinkNotNull, NodeHandle},
            store::{Entity, EntityId},
        },
        model::{AssociationKind, ModelMetadata},
    };
}
