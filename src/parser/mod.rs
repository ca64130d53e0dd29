//! Low-level byte input and the error type of the reading pipeline.

pub mod buffered_byte_source;
pub mod byte_source;
pub mod in_memory_byte_source;
pub mod parse_error;

pub use buffered_byte_source::BufferedByteSource;
pub use byte_source::ByteSource;
pub use in_memory_byte_source::InMemoryByteSource;
pub use parse_error::{ParseError, ParseErrorKind};
