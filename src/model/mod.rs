//! Data model for rooted multi-way phylogenetic trees.
//!
//! # Forest and nodes
//!
//! All nodes live in a [Forest], an arena addressed by [NodeId]. A node
//! keeps its children as a first-child/next-sibling chain in declaration
//! order, and the forest may hold several trees at once: one per parsed
//! record, plus any clades detached or copied while editing.
//!
//! Ids are stamped in creation order starting at 1 and never reused, so a
//! handle stays valid for the life of the forest even after its clade has
//! been detached from its tree.
//!
//! # Editing and queries
//!
//! Structural edits ([Forest::add_child], [Forest::remove_child],
//! [Forest::remove_clade], [Forest::copy_clade]) take `&mut Forest` and
//! keep the link chains consistent. Queries ([Forest::lca],
//! [Forest::up_distance], [Forest::key]) take `&self` and leave no marks
//! behind, so a shared forest can be queried concurrently.

pub mod forest;
pub mod node;
pub mod tree_error;

pub use forest::{Ancestors, CladeIter, CladeRemoval, Forest};
pub use node::{Node, NodeId};
pub use tree_error::TreeError;
