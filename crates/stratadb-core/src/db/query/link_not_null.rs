use crate::{
    Error,
    db::{engine::QueryEngine, store::EntityIterable},
    model::{AssociationKind, ModelMetadata},
};

///
/// LinkNotNull
///
/// Matches entities of the queried kind that have a non-null value on one
/// link. When metadata shows the link belongs to a bidirectional association
/// whose opposite kind has no sub-types, the query is rewritten as a
/// paired-link traversal that narrows the scan using both ends of the
/// relationship. The rewrite is an optimization only: on any association it
/// applies to, it returns the same logical result set as the direct form.
///

#[derive(Clone, Debug)]
pub struct LinkNotNull {
    name: String,
}

impl LinkNotNull {
    pub(in crate::db) const SHORT_NAME: &'static str = "lnn";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn link_name(&self) -> &str {
        &self.name
    }

    pub(in crate::db) fn instantiate<'t>(
        &self,
        entity_kind: &str,
        engine: &'t QueryEngine,
        metadata: Option<&ModelMetadata>,
    ) -> Result<EntityIterable<'t>, Error> {
        if let Some(model) = metadata
            && let Some((opposite_kind, opposite_link)) = self.rewrite_target(entity_kind, model)
        {
            engine.assert_operational()?;
            let txn = engine.store().current_transaction()?;

            return Ok(txn
                .find_with_links_to(entity_kind, &self.name, opposite_kind, opposite_link)
                .distinct());
        }

        engine.assert_operational()?;
        let txn = engine.store().current_transaction()?;

        Ok(txn.find_with_links(entity_kind, &self.name).distinct())
    }

    /// Resolve the (opposite kind, opposite link) pair for the paired-link
    /// rewrite. Any lookup miss, a directed association, or a sub-typed
    /// opposite kind short-circuits to `None`, which sends instantiation
    /// down the direct single-link path. Sub-typed opposites may be reached
    /// through inherited ends the simple opposite-name lookup cannot see,
    /// so the rewrite would be unsound there.
    fn rewrite_target<'m>(
        &self,
        entity_kind: &str,
        model: &'m ModelMetadata,
    ) -> Option<(&'m str, &'m str)> {
        let emd = model.entity(entity_kind)?;
        let end = emd.association_end(&self.name)?;
        let amd = end.association();

        if amd.kind() == AssociationKind::Directed {
            return None;
        }

        let opposite = model.entity(end.opposite_kind())?;
        if opposite.has_sub_types() {
            return None;
        }

        let opposite_end = amd.opposite_end(end)?;

        Some((opposite.kind(), opposite_end.link_name()))
    }
}
