//! Error types for AIFF chunk decoding.
//!
//! Decoding is fail-fast: the first malformed field aborts the decode of the
//! chunk and no partially populated structure is returned.
//!
//! # Error Categories
//!
//! - [`AiffError::InvalidFormat`] - Declared chunk size is below the format
//!   minimum, or disagrees with the compression-name pstring it contains
//! - [`AiffError::UnexpectedEof`] - A field would be read past the end of the
//!   supplied buffer
//! - [`AiffError::BinrwError`] - Binary parsing library error
//!
//! # Examples
//!
//! ```
//! use aiff_chunk::{AiffError, ChunkHeader, ChunkId, CommonChunkDecoder};
//!
//! let header = ChunkHeader { id: ChunkId::COMM, size: 10 };
//! let err = CommonChunkDecoder::new(header, false).unwrap_err();
//! assert!(matches!(err, AiffError::InvalidFormat(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`AiffError`] as the error type.
pub type Result<T> = std::result::Result<T, AiffError>;

/// Errors that can occur while decoding AIFF and AIFF-C chunk structures.
#[derive(Error, Debug)]
pub enum AiffError {
    /// Chunk contents do not conform to the AIFF/AIFF-C layout.
    ///
    /// Raised when a Common chunk declares fewer bytes than the format
    /// requires, or when the compression-name pstring length does not
    /// account for the declared chunk size.
    #[error("Invalid AIFF format: {0}")]
    InvalidFormat(String),

    /// A read would run past the end of the buffer.
    #[error(
        "Unexpected end of buffer: needed {needed} bytes at offset {offset}, buffer holds {available}"
    )]
    UnexpectedEof {
        /// Offset of the attempted read.
        offset: usize,
        /// Number of bytes the read needed.
        needed: usize,
        /// Total length of the buffer.
        available: usize,
    },

    /// Binary parsing library error.
    #[error("binrw error: {0}")]
    BinrwError(String),
}

impl From<binrw::Error> for AiffError {
    fn from(err: binrw::Error) -> Self {
        AiffError::BinrwError(format!("{err}"))
    }
}
