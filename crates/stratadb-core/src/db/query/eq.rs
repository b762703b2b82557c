use crate::db::query::FilterNode;

///
/// ValueEq
///
/// Injected comparison policy for the discriminating fields of query nodes.
/// Structural equality delegates the final field comparison here so callers
/// can supply a policy where a sentinel "wildcard" value matches anything.
/// The default is ordinary value equality.
///

pub trait ValueEq {
    /// Compare two discriminating field values.
    fn values_equal(&self, a: &str, b: &str) -> bool;

    /// True if `node` matches any node regardless of variant.
    fn matches_any(&self, node: &FilterNode) -> bool {
        let _ = node;
        false
    }
}

///
/// StrictValueEq
///
/// Plain value equality; no wildcard.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct StrictValueEq;

impl ValueEq for StrictValueEq {
    fn values_equal(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

///
/// WildcardValueEq
///
/// Value equality with one sentinel that compares equal to every field
/// value. A `LinkNotNull` node carrying the sentinel as its link name
/// matches any node outright.
///

#[derive(Clone, Debug)]
pub struct WildcardValueEq {
    wildcard: String,
}

impl WildcardValueEq {
    #[must_use]
    pub fn new(wildcard: impl Into<String>) -> Self {
        Self {
            wildcard: wildcard.into(),
        }
    }

    #[must_use]
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }
}

impl ValueEq for WildcardValueEq {
    fn values_equal(&self, a: &str, b: &str) -> bool {
        a == self.wildcard || b == self.wildcard || a == b
    }

    fn matches_any(&self, node: &FilterNode) -> bool {
        matches!(node, FilterNode::LinkNotNull(n) if n.link_name() == self.wildcard)
    }
}
