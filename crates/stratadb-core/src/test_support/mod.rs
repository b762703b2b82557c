//! In-memory store and model fixtures for exercising query nodes without a
//! real storage engine.

mod fixtures;
mod store;

pub(crate) use fixtures::{entity, manager_model, manager_model_with_sub_types, new_call_log, user};
pub(crate) use store::{CallLog, MemoryStore, MemoryTransaction, StoreCall};
