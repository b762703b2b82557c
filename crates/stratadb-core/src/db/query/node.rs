use crate::{
    Error,
    db::{
        engine::QueryEngine,
        query::{All, LinkNotNull, StrictValueEq, ValueEq},
        store::EntityIterable,
    },
    model::ModelMetadata,
};
use derive_more::{Deref, Display};
use std::fmt;

///
/// NodeHandle
///
/// Append-only textual encoding of a node's structural identity, used as a
/// cache key for compiled query plans. Structurally equal nodes produce
/// identical handles; discriminating fields are parenthesized so no field
/// layout collides with another.
///

#[derive(Clone, Debug, Default, Deref, Display, Eq, Hash, PartialEq)]
#[display("{_0}")]
pub struct NodeHandle(String);

impl NodeHandle {
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

///
/// FilterNode
///
/// Closed set of query-node variants. Nodes are plain values: stateless
/// between construction and instantiation, safe to share across threads, and
/// cheap to clone. Dispatch is exhaustive matching, never reflection.
///

#[derive(Clone, Debug)]
pub enum FilterNode {
    All(All),
    LinkNotNull(LinkNotNull),
}

impl FilterNode {
    /// Produce a lazy, duplicate-free sequence of matching entities. Errors
    /// from the engine's operational check and the store's transaction
    /// accessor propagate unchanged; instantiation defines no error kinds of
    /// its own. The result borrows the engine: the underlying transaction
    /// must remain valid for the lifetime of enumeration.
    pub fn instantiate<'t>(
        &self,
        entity_kind: &str,
        engine: &'t QueryEngine,
        metadata: Option<&ModelMetadata>,
    ) -> Result<EntityIterable<'t>, Error> {
        match self {
            Self::All(node) => node.instantiate(entity_kind, engine),
            Self::LinkNotNull(node) => node.instantiate(entity_kind, engine, metadata),
        }
    }

    /// Stable, short, unique variant tag, used inside handles.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::All(_) => All::SHORT_NAME,
            Self::LinkNotNull(_) => LinkNotNull::SHORT_NAME,
        }
    }

    /// Append this node's variant tag and discriminating fields to a growing
    /// handle buffer in a fixed, field-order-stable layout.
    pub fn append_handle(&self, out: &mut String) {
        out.push_str(self.short_name());

        match self {
            Self::All(_) => {}
            Self::LinkNotNull(node) => {
                out.push('(');
                out.push_str(node.link_name());
                out.push(')');
            }
        }
    }

    /// The full handle of this node as a plan-cache key.
    #[must_use]
    pub fn handle(&self) -> NodeHandle {
        let mut out = String::new();
        self.append_handle(&mut out);

        NodeHandle(out)
    }

    /// Structural equality under an injected field-comparison policy. True
    /// iff `other` is the same variant and all discriminating fields compare
    /// equal under `policy` — unless the policy declares `other` a wildcard
    /// that matches any node regardless of variant.
    #[must_use]
    pub fn structurally_eq(&self, other: &Self, policy: &dyn ValueEq) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if policy.matches_any(other) {
            return true;
        }

        match (self, other) {
            (Self::All(_), Self::All(_)) => true,
            (Self::LinkNotNull(a), Self::LinkNotNull(b)) => {
                policy.values_equal(a.link_name(), b.link_name())
            }
            _ => false,
        }
    }

    /// Human-readable rendering for diagnostics. Not used for equality or
    /// caching.
    #[must_use]
    pub fn display(&self, prefix: &str) -> String {
        let mut out = format!("{prefix}{}", self.short_name());

        if let Self::LinkNotNull(node) = self {
            out.push('(');
            out.push_str(node.link_name());
            out.push_str("!=null)");
        }

        out
    }
}

// Structural equality under the strict default policy.
impl PartialEq for FilterNode {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other, &StrictValueEq)
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(""))
    }
}

impl From<All> for FilterNode {
    fn from(node: All) -> Self {
        Self::All(node)
    }
}

impl From<LinkNotNull> for FilterNode {
    fn from(node: LinkNotNull) -> Self {
        Self::LinkNotNull(node)
    }
}
