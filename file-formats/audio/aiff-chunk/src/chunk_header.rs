//! AIFF chunk header decoding
//!
//! Every chunk in an AIFF or AIFF-C file starts with the same 8-byte header:
//! a 4-byte tag followed by a big-endian 4-byte body length.

use std::io::Cursor;

use binrw::{BinRead, BinWrite};

use crate::chunk_id::ChunkId;
use crate::error::Result;
use crate::io_helpers;

/// Standard AIFF chunk header (8 bytes)
///
/// # Binary Layout
///
/// ```text
/// Offset | Size | Field | Description
/// -------|------|-------|------------------------------------------
/// 0x00   |  4   | id    | Chunk tag, stored as-is
/// 0x04   |  4   | size  | Body size in bytes (big-endian, excludes header)
/// ```
///
/// # Size Field Semantics
///
/// `size` counts the body bytes only. It is taken on trust: nothing here
/// checks it against the length of the underlying buffer.
///
/// # Usage with binrw
///
/// ```rust
/// use aiff_chunk::ChunkHeader;
/// use binrw::BinRead;
/// use std::io::Cursor;
///
/// # fn example() -> binrw::BinResult<()> {
/// let data = [b'C', b'O', b'M', b'M', 0x00, 0x00, 0x00, 0x12];
/// let header = ChunkHeader::read(&mut Cursor::new(&data))?;
/// assert_eq!(header.size, 18);
/// assert_eq!(header.total_size(), 26);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(big)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkHeader {
    /// Chunk tag
    pub id: ChunkId,

    /// Size of chunk body in bytes (excludes 8-byte header)
    pub size: u32,
}

impl ChunkHeader {
    /// Size of a chunk header in bytes
    pub const SIZE: usize = 8;

    /// Total size including header (size + 8)
    #[must_use]
    pub const fn total_size(&self) -> u64 {
        self.size as u64 + Self::SIZE as u64
    }

    /// Check if chunk ID matches expected value
    #[must_use]
    pub fn is_chunk(&self, expected: ChunkId) -> bool {
        self.id == expected
    }
}

/// Decode the chunk header starting at `offset` in `buf`.
///
/// Consumes exactly [`ChunkHeader::SIZE`] bytes. The tag is taken verbatim.
/// A buffer too short to hold the header yields
/// [`AiffError::UnexpectedEof`](crate::AiffError::UnexpectedEof).
///
/// ```rust
/// use aiff_chunk::{decode_chunk_header, ChunkId};
///
/// let buf = [0xAA, b'S', b'S', b'N', b'D', 0x00, 0x00, 0x01, 0x00];
/// let header = decode_chunk_header(&buf, 1).unwrap();
/// assert_eq!(header.id, ChunkId::SSND);
/// assert_eq!(header.size, 256);
/// ```
pub fn decode_chunk_header(buf: &[u8], offset: usize) -> Result<ChunkHeader> {
    let bytes = io_helpers::slice_at(buf, offset, ChunkHeader::SIZE)?;
    let header = ChunkHeader::read(&mut Cursor::new(bytes))?;

    log::debug!(
        "Chunk {} at offset {}: {} body bytes",
        header.id,
        offset,
        header.size
    );

    Ok(header)
}
