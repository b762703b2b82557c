use crate::{
    Error,
    db::{engine::QueryEngine, store::EntityIterable},
};

///
/// All
///
/// Trivial leaf matching every entity of the queried kind. The planner seeds
/// trees with it; here it keeps the variant set closed and non-degenerate.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct All;

impl All {
    pub(in crate::db) const SHORT_NAME: &'static str = "all";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub(in crate::db) fn instantiate<'t>(
        &self,
        entity_kind: &str,
        engine: &'t QueryEngine,
    ) -> Result<EntityIterable<'t>, Error> {
        engine.assert_operational()?;
        let txn = engine.store().current_transaction()?;

        Ok(txn.all(entity_kind).distinct())
    }
}
