//! Extraction engine: turns a compiled module tree into documentation
//! records.
//!
//! Three catalogs are produced per module, each an ordered sequence of
//! [`Record`]s:
//!
//! - node records for every leaf, leaf-list, list, and container
//!   ([`node_catalog`]),
//! - RPC records for every module-level `rpc` ([`rpc_catalog`]),
//! - notification records for every module-level `notification`
//!   ([`notification_catalog`]).
//!
//! All three borrow the module tree read-only and never fail: missing
//! substatements and unresolved grouping references are normal cases that
//! simply contribute nothing.

mod descriptor;
mod nodes;
mod notification;
mod record;
mod rpc;
mod structure;

pub use descriptor::NodeDescriptor;
pub use nodes::node_catalog;
pub use notification::notification_catalog;
pub use record::{CatalogSet, Record, RecordBuilder};
pub use rpc::rpc_catalog;
pub use structure::render_structure;
