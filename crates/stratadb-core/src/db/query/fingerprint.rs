use crate::db::query::FilterNode;
use sha2::{Digest, Sha256};
use std::fmt;

///
/// PlanFingerprint
///
/// Fixed-width hashed form of a node's structural identity, for plan caches
/// that prefer binary keys over the textual handle. Structurally equal nodes
/// fingerprint identically.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PlanFingerprint([u8; 32]);

impl PlanFingerprint {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PlanFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

/// Hash a node's structure into a fingerprint. Variant tags and
/// length-prefixed fields keep the encoding unambiguous.
#[must_use]
pub fn fingerprint(node: &FilterNode) -> PlanFingerprint {
    let mut hasher = Sha256::new();
    hash_node(&mut hasher, node);

    PlanFingerprint(hasher.finalize().into())
}

fn hash_node(hasher: &mut Sha256, node: &FilterNode) {
    match node {
        FilterNode::All(_) => write_tag(hasher, 0x01),
        FilterNode::LinkNotNull(n) => {
            write_tag(hasher, 0x02);
            write_str(hasher, n.link_name());
        }
    }
}

/// Encode one length-prefixed string into the hash stream.
fn write_str(hasher: &mut Sha256, value: &str) {
    write_len_u32(hasher, value.len());
    hasher.update(value.as_bytes());
}

/// Encode a platform-sized length as u32 with deterministic saturation.
fn write_len_u32(hasher: &mut Sha256, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}
