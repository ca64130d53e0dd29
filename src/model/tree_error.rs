//! Error type for recoverable tree-editing failures.

use crate::model::node::NodeId;
use thiserror::Error;

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=

/// Errors returned by structural operations on a [Forest](crate::model::Forest).
///
/// These are ordinary recoverable values: a failed removal or distance
/// query leaves the forest untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The named parent has no children at all.
    #[error("node {0} has no children")]
    NoChildren(NodeId),

    /// The given node is not among the parent's children.
    #[error("node {child} is not a child of node {parent}")]
    ChildNotFound { parent: NodeId, child: NodeId },

    /// Walking rootward from the node reached a root without meeting the
    /// claimed ancestor.
    #[error("node {ancestor} is not an ancestor of node {node}")]
    NotAncestor { node: NodeId, ancestor: NodeId },
}
