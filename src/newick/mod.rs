//! Newick format reading, writing, and streaming.
//!
//! # Accepted input
//!
//! A record is one tree description terminated by `;`:
//!
//! * `(` and `)` group children, `,` separates siblings
//! * a label may follow any node, including a group's closing `)`
//! * `:` followed by a number gives the branch length to the parent;
//!   plain, scientific (`1e-5`) and signed forms are accepted
//! * `'...'` quotes a label, with `''` as the escape for a literal quote;
//!   underscores in unquoted labels mean spaces
//! * `[...]` is a comment and is ignored anywhere between tokens
//! * bytes before the first `(` of a record are discarded, so named
//!   records like `tree1 = (A,B);` work
//!
//! Reading happens in three stages: normalization rewrites comments,
//! quotes and branch-length spans into a uniform shape, a lexer splits
//! the record into tokens, and [parse_record] folds the tokens into a
//! [Forest]. Writing is the single recursive pass of [to_newick].
//!
//! # Quick parsing
//!
//! For a string holding exactly one tree, or a whole file of trees:
//!
//! ```
//! use arbor::newick;
//!
//! let (forest, root) = newick::parse_str("((A,B),C);").unwrap();
//! assert_eq!(forest.num_nodes(), 5);
//! assert!(forest[root].is_root());
//! ```
//!
//! # Streaming
//!
//! [NewickScanner] reads records one at a time from a string or file and
//! parses them on demand, collecting every tree into one shared forest.

mod lexer;
mod normalize;

pub mod parser;
pub mod scanner;
pub mod writer;

pub use parser::parse_record;
pub use scanner::NewickScanner;
pub use writer::to_newick;

use std::path::Path;

use crate::model::{Forest, NodeId};
use crate::parser::parse_error::ParseError;

// ============================================================================
// Quick parsing API (pub)
// ============================================================================

/// Parses a Newick string holding a single tree into a fresh [Forest].
///
/// Returns the forest together with the root of the parsed tree.
///
/// # Errors
/// [EndOfTrees](crate::parser::ParseErrorKind::EndOfTrees) if the string
/// denotes no tree at all; otherwise whatever [parse_record] reports.
///
/// # Example
/// ```
/// use arbor::newick;
///
/// let (forest, root) = newick::parse_str("(Fratercula_arctica,Cepphus_grylle);").unwrap();
/// let first = forest[root].child().unwrap();
/// assert_eq!(forest[first].label(), "Fratercula arctica");
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<(Forest, NodeId), ParseError> {
    let mut forest = Forest::new();
    match parse_record(&mut forest, newick.as_ref())? {
        Some(root) => Ok((forest, root)),
        None => Err(ParseError::end_of_trees()),
    }
}

/// Parses every tree in a Newick file into one shared [Forest].
///
/// Returns the forest together with the root ids in file order.
///
/// # Errors
/// Returns an error if the file cannot be opened or a record cannot be
/// parsed.
///
/// # Example
/// ```no_run
/// use arbor::newick;
///
/// let (forest, roots) = newick::parse_file("alcidae.nwk")?;
/// println!("parsed {} trees, {} nodes", roots.len(), forest.num_nodes());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<(Forest, Vec<NodeId>), ParseError> {
    let mut scanner = NewickScanner::for_file(path)?;
    let mut roots = Vec::new();
    while let Some(root) = scanner.next_tree()? {
        roots.push(root);
    }
    Ok((scanner.into_forest(), roots))
}
