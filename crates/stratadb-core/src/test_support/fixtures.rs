use crate::{
    db::store::{Entity, EntityId},
    model::ModelMetadata,
    test_support::CallLog,
};
use std::{cell::RefCell, rc::Rc};

pub(crate) fn new_call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn entity(id: u128, kind: &str) -> Entity {
    Entity::new(EntityId::from_u128(id), kind)
}

pub(crate) fn user(id: u128) -> Entity {
    entity(id, "User")
}

/// `User` with the bidirectional `manager` / `reports` association and no
/// sub-types: the rewrite-eligible shape.
pub(crate) fn manager_model() -> ModelMetadata {
    ModelMetadata::builder()
        .entity("User")
        .bidirectional("User", "manager", "User", "reports")
        .build()
        .expect("fixture model builds")
}

/// Same association, but `User` has sub-types, which makes the paired-link
/// rewrite unsound.
pub(crate) fn manager_model_with_sub_types() -> ModelMetadata {
    ModelMetadata::builder()
        .entity("User")
        .sub_type("User", "Admin")
        .sub_type("User", "Contractor")
        .bidirectional("User", "manager", "User", "reports")
        .build()
        .expect("fixture model builds")
}
