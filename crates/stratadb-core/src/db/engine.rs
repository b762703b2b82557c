use crate::db::store::PersistentStore;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error as ThisError;

///
/// EngineError
///

#[derive(Debug, ThisError)]
pub enum EngineError {
    #[error("query engine is not operational")]
    NotOperational,
}

///
/// QueryEngine
///
/// Handle to the executing engine. Query nodes use it to assert the engine
/// can serve queries and to reach the persistent store. The operational flag
/// is the only piece of state; everything else is shared-read.
///

pub struct QueryEngine {
    store: Box<dyn PersistentStore>,
    operational: AtomicBool,
}

impl QueryEngine {
    #[must_use]
    pub fn new(store: impl PersistentStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            operational: AtomicBool::new(true),
        }
    }

    /// Fail fast if the engine has been shut down. Never blocks.
    pub fn assert_operational(&self) -> Result<(), EngineError> {
        if self.operational.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(EngineError::NotOperational)
        }
    }

    /// Mark the engine unusable. Subsequent instantiations fail fast.
    pub fn shut_down(&self) {
        self.operational.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn store(&self) -> &dyn PersistentStore {
        self.store.as_ref()
    }
}
