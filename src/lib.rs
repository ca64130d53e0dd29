//! Arbor is a library to read, edit, and write phylogenetic trees in
//! Newick format.
//!
//! ## Core functionality
//!
//! * Parsing of Newick records from strings or files, including quoted
//!   labels, comments, branch lengths in plain and scientific notation,
//!   and labels on inner nodes
//! * A [Forest](model::Forest) arena owning any number of trees, with
//!   stable numeric ids instead of lifetimes or reference counting
//! * Tree surgery: attach and detach children, remove whole clades, and
//!   deep-copy clades within the forest
//! * Analysis helpers: lowest common ancestors, rootward distances,
//!   canonical clade keys, pre-order traversal
//! * A streaming [scanner](newick::NewickScanner) that reads one record
//!   at a time, so files with many trees need not be parsed up front
//! * Serialization back to Newick with canonical quoting and compact
//!   branch lengths
//!
//! Queries never store marks in the nodes, so a shared `&Forest` can be
//! queried from several threads at once; edits take `&mut Forest`.
//!
//! ## Usage
//!
//! Parse a single tree and write it back:
//!
//! ```
//! use arbor::parse_newick_str;
//!
//! let (forest, root) = parse_newick_str("((A:0.1,B:0.2):0.3,C:0.4);").unwrap();
//! assert_eq!(forest.to_newick(root), "((A:0.1,B:0.2):0.3,C:0.4);");
//! ```
//!
//! Walk into a tree and query it:
//!
//! ```
//! use arbor::parse_newick_str;
//!
//! let (forest, root) = parse_newick_str("((A:0.1,B:0.2)ab:0.3,C:0.4);").unwrap();
//! let ab = forest[root].child().unwrap();
//! let a = forest[ab].child().unwrap();
//! let c = forest[ab].sib().unwrap();
//!
//! assert_eq!(forest.lca(a, c), Some(root));
//! assert_eq!(forest.up_distance(a, root).unwrap(), 0.4);
//! assert_eq!(forest.key(root, "-"), "A-B-C-ab");
//! ```
//!
//! Stream a file of trees with [newick::NewickScanner], or grab them all
//! at once:
//!
//! ```no_run
//! use arbor::parse_newick_file;
//!
//! let (forest, roots) = parse_newick_file("data/alcidae.nwk")?;
//! for root in roots {
//!     println!("{}", forest.key(root, " "));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod model;
pub mod newick;
pub mod parser;

use std::path::Path;

use crate::model::{Forest, NodeId};
use crate::parser::parse_error::ParseError;

// ============================================================================
// Quick Newick parsing (pub)
// ============================================================================

/// Parses a Newick string holding a single tree.
///
/// Returns a fresh [Forest] together with the root of the parsed tree.
/// Forwards to [newick::parse_str] for convenient top-level use.
pub fn parse_newick_str<S: AsRef<str>>(newick: S) -> Result<(Forest, NodeId), ParseError> {
    newick::parse_str(newick)
}

/// Parses every tree in a Newick file into one shared [Forest].
///
/// Returns the forest together with the root ids in file order. See
/// [newick::parse_file].
pub fn parse_newick_file<P: AsRef<Path>>(path: P) -> Result<(Forest, Vec<NodeId>), ParseError> {
    newick::parse_file(path)
}
