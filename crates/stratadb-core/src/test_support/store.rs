use crate::db::store::{
    Entity, EntityId, EntityIterable, PersistentStore, StoreError, StoreTransaction,
};
use std::{cell::RefCell, rc::Rc};

///
/// StoreCall
///
/// One recorded store query, for asserting which code path a node took.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum StoreCall {
    All {
        kind: String,
    },
    WithLinks {
        kind: String,
        link: String,
    },
    WithLinksTo {
        kind: String,
        link: String,
        opposite_kind: String,
        opposite_link: String,
    },
}

pub(crate) type CallLog = Rc<RefCell<Vec<StoreCall>>>;

#[derive(Debug)]
struct Link {
    source: EntityId,
    link_name: String,
    target: EntityId,
}

///
/// MemoryTransaction
///
/// Vec-backed read context. Results are produced lazily and may contain
/// duplicates when an entity carries several values on the same link, which
/// is exactly what the nodes' `distinct` stage has to absorb.
///

#[derive(Debug)]
pub(crate) struct MemoryTransaction {
    entities: Vec<Entity>,
    links: Vec<Link>,
    calls: CallLog,
}

impl MemoryTransaction {
    pub(crate) const fn new(calls: CallLog) -> Self {
        Self {
            entities: Vec::new(),
            links: Vec::new(),
            calls,
        }
    }

    pub(crate) fn insert(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub(crate) fn link(&mut self, source: EntityId, link_name: &str, target: EntityId) {
        self.links.push(Link {
            source,
            link_name: link_name.to_owned(),
            target,
        });
    }

    /// Add a link plus its mirror, the way an engine maintains both ends of
    /// a bidirectional association.
    pub(crate) fn link_mirrored(
        &mut self,
        source: EntityId,
        link_name: &str,
        target: EntityId,
        mirror_link: &str,
    ) {
        self.link(source, link_name, target);
        self.link(target, mirror_link, source);
    }

    fn entity_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    fn has_link(&self, source: EntityId, link_name: &str, target: EntityId) -> bool {
        self.links.iter().any(|link| {
            link.source == source && link.link_name == link_name && link.target == target
        })
    }
}

impl StoreTransaction for MemoryTransaction {
    fn all<'t>(&'t self, entity_kind: &str) -> EntityIterable<'t> {
        self.calls.borrow_mut().push(StoreCall::All {
            kind: entity_kind.to_owned(),
        });

        let kind = entity_kind.to_owned();
        EntityIterable::new(
            self.entities
                .iter()
                .filter(move |entity| entity.kind() == kind)
                .cloned(),
        )
    }

    fn find_with_links<'t>(&'t self, entity_kind: &str, link_name: &str) -> EntityIterable<'t> {
        self.calls.borrow_mut().push(StoreCall::WithLinks {
            kind: entity_kind.to_owned(),
            link: link_name.to_owned(),
        });

        let kind = entity_kind.to_owned();
        let link = link_name.to_owned();
        EntityIterable::new(
            self.links
                .iter()
                .filter(move |l| l.link_name == link)
                .filter_map(move |l| self.entity_by_id(l.source))
                .filter(move |entity| entity.kind() == kind)
                .cloned(),
        )
    }

    fn find_with_links_to<'t>(
        &'t self,
        entity_kind: &str,
        link_name: &str,
        opposite_kind: &str,
        opposite_link_name: &str,
    ) -> EntityIterable<'t> {
        self.calls.borrow_mut().push(StoreCall::WithLinksTo {
            kind: entity_kind.to_owned(),
            link: link_name.to_owned(),
            opposite_kind: opposite_kind.to_owned(),
            opposite_link: opposite_link_name.to_owned(),
        });

        let kind = entity_kind.to_owned();
        let link = link_name.to_owned();
        let opposite_kind = opposite_kind.to_owned();
        let opposite_link = opposite_link_name.to_owned();
        EntityIterable::new(
            self.links
                .iter()
                .filter(move |l| l.link_name == link)
                .filter(move |l| {
                    self.entity_by_id(l.target)
                        .is_some_and(|target| target.kind() == opposite_kind)
                        && self.has_link(l.target, &opposite_link, l.source)
                })
                .filter_map(move |l| self.entity_by_id(l.source))
                .filter(move |entity| entity.kind() == kind)
                .cloned(),
        )
    }
}

///
/// MemoryStore
///
/// Store holding at most one open transaction.
///

#[derive(Debug)]
pub(crate) struct MemoryStore {
    txn: Option<MemoryTransaction>,
}

impl MemoryStore {
    pub(crate) const fn with_transaction(txn: MemoryTransaction) -> Self {
        Self { txn: Some(txn) }
    }

    pub(crate) const fn without_transaction() -> Self {
        Self { txn: None }
    }
}

impl PersistentStore for MemoryStore {
    fn current_transaction(&self) -> Result<&dyn StoreTransaction, StoreError> {
        self.txn
            .as_ref()
            .map(|txn| txn as &dyn StoreTransaction)
            .ok_or(StoreError::NoActiveTransaction)
    }
}
