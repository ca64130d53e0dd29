//! Error types for the Newick reading pipeline.
//!
//! [ParseError] carries a failure [kind](ParseErrorKind) together with the
//! position it occurred at and a snippet of the upcoming text, so a bad
//! record in a large file can be located without re-reading the file.

use std::fmt;

use thiserror::Error;

/// Number of upcoming chars captured as context in errors.
pub(crate) const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSE ERROR KIND
// =#========================================================================#=

/// Failure categories produced while scanning and parsing Newick records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The byte source failed: unreadable file or a record that is not
    /// valid UTF-8.
    #[error("IO error - {0}")]
    Io(String),

    /// A malformed construct inside one record, such as a bad branch
    /// length or an unterminated quote or comment.
    #[error("invalid newick record: {0}")]
    Format(String),

    /// A `)` or `,` with no open group to match it.
    #[error("unbalanced tree structure: {0}")]
    UnbalancedStructure(String),

    /// The input holds no further parseable tree. This is the ordinary
    /// termination of a scan loop, not an application failure.
    #[error("no further trees in the input")]
    EndOfTrees,
}

// =#========================================================================#=
// PARSE ERROR
// =#========================================================================#=

/// Parsing error with contextual information about where it occurred.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// What went wrong
    kind: ParseErrorKind,
    /// Offset the failure was detected at: a char offset into the record
    /// for parse failures, a byte offset into the stream for read failures
    position: usize,
    /// Upcoming text at the failure, possibly empty
    context: String,
}

impl ParseError {
    /// Creates a new parsing error.
    pub fn new(kind: ParseErrorKind, position: usize, context: String) -> ParseError {
        ParseError {
            kind,
            position,
            context,
        }
    }

    /// Creates a parsing error without positional context, for failures
    /// that are not tied to a place in the input.
    pub fn without_context(kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Shorthand for an [EndOfTrees](ParseErrorKind::EndOfTrees) error.
    pub fn end_of_trees() -> ParseError {
        ParseError::without_context(ParseErrorKind::EndOfTrees)
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the position this error occurred at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the captured upcoming text, empty if none was available.
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;
        if !self.context.is_empty() {
            write!(
                f,
                "\n  Context (next {} chars): {}",
                self.context.chars().count(),
                self.context
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(error: std::io::Error) -> ParseError {
        ParseError::without_context(ParseErrorKind::Io(error.to_string()))
    }
}
