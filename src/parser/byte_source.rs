//! Trait abstracting byte inputs consumed by the scanner.

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================#=

/// Interface for byte inputs consumed by the
/// [NewickScanner](crate::newick::NewickScanner).
///
/// Abstracts over in-memory data and buffered file streams. The scanner
/// only ever moves forward one byte at a time, so the surface is minimal.
pub trait ByteSource {
    /// Returns the next byte and advances, or `None` at end of input.
    ///
    /// Read failures of an underlying stream surface as end of input.
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns the absolute offset of the next unread byte.
    fn position(&self) -> usize;
}
