//! Buffered file implementation of [ByteSource].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::parser::byte_source::ByteSource;

// =#========================================================================#=
// BUFFERED BYTE SOURCE
// =#========================================================================#=

/// A byte source streaming from a file through a [BufReader], so files
/// larger than memory can be scanned record by record.
pub struct BufferedByteSource {
    /// Underlying reader of the file, handles fetching chunks
    reader: BufReader<File>,
    /// Absolute offset of the next unread byte
    pos: usize,
}

impl BufferedByteSource {
    /// Creates a buffered byte source reading from the given file.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<BufferedByteSource> {
        let file = File::open(path)?;
        Ok(BufferedByteSource {
            reader: BufReader::new(file),
            pos: 0,
        })
    }
}

impl ByteSource for BufferedByteSource {
    fn next_byte(&mut self) -> Option<u8> {
        let buffer = self.reader.fill_buf().ok()?;
        let byte = buffer.first().copied()?;
        self.reader.consume(1);
        self.pos += 1;
        Some(byte)
    }

    fn position(&self) -> usize {
        self.pos
    }
}

// =#========================================================================#=
// TESTS - BUFFERED BYTE SOURCE
// =#========================================================================#=

#[cfg(test)]
mod tests {
    use crate::newick::NewickScanner;
    use crate::parser::buffered_byte_source::BufferedByteSource;

    #[test]
    fn test_buffered_scan_of_newick_file() {
        let source = BufferedByteSource::from_file("tests/fixtures/newick_t2_n5.nwk").unwrap();
        let mut scanner = NewickScanner::new(source);

        let mut trees = 0;
        while scanner.next_tree().unwrap().is_some() {
            trees += 1;
        }
        assert_eq!(trees, 2);
        assert_eq!(scanner.forest().num_nodes(), 18);
    }
}
