//! Filter-tree query nodes. Every node satisfies one contract: instantiate
//! against a live transaction, clone without shared state, compare
//! structurally, append a stable handle, and render for diagnostics.

mod all;
mod eq;
mod fingerprint;
mod link_not_null;
mod node;


pub use all::All;
pub use eq::{StrictValueEq, ValueEq, WildcardValueEq};
pub use fingerprint::{PlanFingerprint, fingerprint};
pub use link_not_null::LinkNotNull;
pub use node::{FilterNode, NodeHandle};
