//! Parsing of Newick records into a [Forest].
//!
//! A normalized, tokenized record is folded into the forest with a single
//! cursor. Each token moves the cursor or edits the node under it:
//!
//! * `(` creates a child under the cursor (plus the root itself on the
//!   first `(`) and descends to it
//! * `,` creates the next sibling and moves sideways to it
//! * `)` climbs back to the parent
//! * a branch-length span sets the length of the cursor node
//! * a label fragment appends to the label of the cursor node
//!
//! Tokens arriving while no node exists yet, such as a leading name in
//! `tree1 = (A,B);`, are discarded.

use crate::model::{Forest, NodeId};
use crate::newick::lexer::{Lexer, Token};
use crate::newick::normalize::normalize;
use crate::parser::parse_error::ParseError;

/// Parses one Newick record into `forest` and returns the root of the
/// tree it denotes.
///
/// Returns `Ok(None)` if the record contains no `(` and therefore denotes
/// no tree. Nodes are created in parse order with the forest's next ids,
/// so parsing successive records into one forest keeps ids strictly
/// increasing across trees.
///
/// The record runs up to its `;`; a record missing the terminator is
/// accepted and treated as complete at end of input. Label fragments
/// accumulate, so pieces split by quotes or comments concatenate into one
/// label.
///
/// # Errors
/// * [UnbalancedStructure](crate::parser::ParseErrorKind::UnbalancedStructure) -
///   a `)` or `,` with no open group to match it
/// * [Format](crate::parser::ParseErrorKind::Format) - a malformed branch
///   length, or an unterminated quote or comment
///
/// # Example
/// ```
/// use arbor::model::Forest;
/// use arbor::newick::parse_record;
///
/// let mut forest = Forest::new();
/// let root = parse_record(&mut forest, "(A:0.1,B:0.2)AB;")
///     .unwrap()
///     .unwrap();
/// assert_eq!(forest[root].label(), "AB");
/// assert_eq!(forest.num_nodes(), 3);
/// ```
pub fn parse_record(forest: &mut Forest, record: &str) -> Result<Option<NodeId>, ParseError> {
    let normalized = normalize(record);
    let mut lexer = Lexer::new(&normalized);
    let mut cursor: Option<NodeId> = None;

    loop {
        let Some(token) = lexer.next_token()? else {
            break;
        };
        match token {
            Token::Open => {
                let parent = match cursor {
                    Some(v) => v,
                    None => forest.new_node(),
                };
                let child = forest.new_node();
                forest.add_child(parent, child);
                cursor = Some(child);
            }
            Token::Close => {
                let up = cursor.and_then(|v| forest[v].parent());
                let Some(parent) = up else {
                    return Err(lexer.unbalanced_error("')' with no open group"));
                };
                cursor = Some(parent);
            }
            Token::Comma => {
                let Some(v) = cursor else {
                    return Err(lexer.unbalanced_error("',' outside any group"));
                };
                if forest[v].parent().is_none() {
                    return Err(lexer.unbalanced_error("',' outside any group"));
                }
                let sib = forest.new_node();
                forest.link_sibling(v, sib);
                cursor = Some(sib);
            }
            Token::Semicolon => break,
            Token::Quoted(text) if text.starts_with(':') => {
                if let Some(v) = cursor {
                    let length: f64 = text[1..].parse().map_err(|_| {
                        lexer.format_error(&format!("invalid branch length '{}'", &text[1..]))
                    })?;
                    forest.node_mut(v).set_length(length);
                }
            }
            Token::Quoted(text) | Token::Fragment(text) => {
                if let Some(v) = cursor {
                    forest.node_mut(v).append_label(&text);
                }
            }
        }
    }

    let Some(mut root) = cursor else {
        return Ok(None);
    };
    while let Some(parent) = forest[root].parent() {
        root = parent;
    }
    Ok(Some(root))
}
