//! In-memory implementation of [ByteSource].

use crate::parser::byte_source::ByteSource;

// =#========================================================================#=
// IN-MEMORY BYTE SOURCE
// =#========================================================================#=

/// A byte source that owns its data, for inputs already in memory.
pub struct InMemoryByteSource {
    /// The owned bytes being scanned
    input: Vec<u8>,
    /// Offset of the next unread byte
    pos: usize,
}

impl InMemoryByteSource {
    /// Creates an in-memory byte source from a vector of bytes.
    pub fn from_vec(bytes: Vec<u8>) -> InMemoryByteSource {
        InMemoryByteSource {
            input: bytes,
            pos: 0,
        }
    }
}

impl From<&str> for InMemoryByteSource {
    fn from(text: &str) -> InMemoryByteSource {
        InMemoryByteSource::from_vec(text.as_bytes().to_vec())
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline(always)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    #[inline(always)]
    fn position(&self) -> usize {
        self.pos
    }
}
