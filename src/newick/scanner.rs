//! Streaming scanner for semicolon-terminated Newick records.

use std::path::Path;

use crate::model::{Forest, NodeId};
use crate::newick::parser::parse_record;
use crate::parser::buffered_byte_source::BufferedByteSource;
use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parse_error::{ParseError, ParseErrorKind};

// =#========================================================================#=
// NEWICK SCANNER
// =#========================================================================#=

/// Reads a stream of Newick records one tree at a time.
///
/// A record is everything up to and including the next `;`. Bytes before
/// a record's first `(` are discarded, so inputs like `tree1 = (A,B);`
/// work; a record without any `(` denotes no tree and ends the scan. All
/// trees materialize into one owned [Forest], so node ids keep increasing
/// across records and clades of different trees can be compared or moved
/// without copying between arenas.
///
/// # Example
/// ```
/// use arbor::newick::NewickScanner;
///
/// let mut scanner = NewickScanner::for_str("(A,B);\n(C,(D,E));\n");
/// let mut roots = Vec::new();
/// while scanner.advance().unwrap() {
///     roots.push(scanner.tree().unwrap());
/// }
/// assert_eq!(roots.len(), 2);
/// assert_eq!(scanner.forest().num_nodes(), 8);
/// ```
pub struct NewickScanner<S: ByteSource> {
    /// Byte input feeding the scanner
    source: S,
    /// Trees parsed so far, shared across records
    forest: Forest,
    /// Most recently read record; empty before the first [advance](NewickScanner::advance)
    text: String,
}

impl NewickScanner<InMemoryByteSource> {
    /// Creates a scanner over an in-memory string.
    pub fn for_str(input: &str) -> NewickScanner<InMemoryByteSource> {
        NewickScanner::new(InMemoryByteSource::from(input))
    }
}

impl NewickScanner<BufferedByteSource> {
    /// Creates a scanner streaming from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn for_file<P: AsRef<Path>>(path: P) -> std::io::Result<NewickScanner<BufferedByteSource>> {
        Ok(NewickScanner::new(BufferedByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> NewickScanner<S> {
    /// Creates a scanner over any byte source.
    pub fn new(source: S) -> NewickScanner<S> {
        NewickScanner {
            source,
            forest: Forest::new(),
            text: String::new(),
        }
    }

    /// Reads the next record into the scanner.
    ///
    /// Returns `Ok(true)` if a record containing a `(` was read, and
    /// `Ok(false)` if the input is exhausted, ends in a fragment without
    /// `;`, or the next record holds no tree.
    ///
    /// # Errors
    /// [Io](ParseErrorKind::Io) if the record is not valid UTF-8.
    pub fn advance(&mut self) -> Result<bool, ParseError> {
        self.text.clear();

        let start = self.source.position();
        let mut record = Vec::new();
        loop {
            match self.source.next_byte() {
                Some(b';') => {
                    record.push(b';');
                    break;
                }
                Some(byte) => record.push(byte),
                None => return Ok(false),
            }
        }

        let record = String::from_utf8(record).map_err(|error| {
            ParseError::new(
                ParseErrorKind::Io(format!("record is not valid UTF-8: {error}")),
                start,
                String::new(),
            )
        })?;

        match record.find('(') {
            Some(open) => {
                self.text.push_str(&record[open..]);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The most recently read record, from its first `(` through `;`,
    /// with comments and quotes still in place.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the current record into the forest and returns the root of
    /// the new tree. Every call materializes a fresh tree from the record.
    ///
    /// # Errors
    /// [EndOfTrees](ParseErrorKind::EndOfTrees) if there is no current
    /// record; otherwise whatever [parse_record] reports.
    pub fn tree(&mut self) -> Result<NodeId, ParseError> {
        if self.text.is_empty() {
            return Err(ParseError::end_of_trees());
        }
        match parse_record(&mut self.forest, &self.text)? {
            Some(root) => Ok(root),
            None => Err(ParseError::end_of_trees()),
        }
    }

    /// Advances and parses in one step, `Ok(None)` once no tree is left.
    ///
    /// # Example
    /// ```
    /// use arbor::newick::NewickScanner;
    ///
    /// let mut scanner = NewickScanner::for_str("(A,B);(C,D);");
    /// let mut trees = 0;
    /// while let Some(root) = scanner.next_tree().unwrap() {
    ///     assert!(scanner.forest()[root].is_root());
    ///     trees += 1;
    /// }
    /// assert_eq!(trees, 2);
    /// ```
    pub fn next_tree(&mut self) -> Result<Option<NodeId>, ParseError> {
        if !self.advance()? {
            return Ok(None);
        }
        Ok(Some(self.tree()?))
    }

    /// The forest holding every tree parsed so far.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Mutable access to the forest, e.g. to edit parsed trees in place.
    pub fn forest_mut(&mut self) -> &mut Forest {
        &mut self.forest
    }

    /// Consumes the scanner, keeping the parsed trees.
    pub fn into_forest(self) -> Forest {
        self.forest
    }
}
