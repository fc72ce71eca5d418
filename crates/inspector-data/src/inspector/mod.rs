//! The seam between inspector queries and whatever owns the component tree.
//!
//! An inspector is responsible for:
//! 1. Walking its hierarchy from the queried node up to the root
//! 2. Resolving the node's source location, when it has one
//!
//! and handing back a complete `InspectionSnapshot`. Renderers implement
//! `Inspector` over their own trees; `ComponentTree` is an in-memory one.

mod tree;

pub use tree::{ComponentTree, NodeId};

use crate::diagnostic::InspectorError;
use crate::snapshot::InspectionSnapshot;

/// Trait for hierarchy collaborators that answer inspector queries.
pub trait Inspector {
    /// Handle identifying a node in the collaborator's tree.
    type Node;

    /// Builds the snapshot for `node`. Either the full snapshot is returned
    /// or nothing is.
    fn inspect(&self, node: &Self::Node) -> Result<InspectionSnapshot, InspectorError>;
}
