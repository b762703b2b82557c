use crate::{db::engine::EngineError, db::store::StoreError, model::ModelError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error surface. Collaborator failures propagate through here
/// unmodified; no layer below performs recovery or retries.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
