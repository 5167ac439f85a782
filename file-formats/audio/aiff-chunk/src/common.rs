//! Common (COMM) chunk decoding
//!
//! The Common chunk describes the sampled sound: channel count, number of
//! sample frames, bits per sample and sample rate. AIFF-C appends a
//! compression type tag and, optionally, a human-readable compression name.
//!
//! # Binary Layout
//!
//! Offsets are relative to the start of the chunk body (right after the
//! 8-byte chunk header).
//!
//! ```text
//! Offset | Size | Field              | Description
//! -------|------|--------------------|---------------------------------------
//! 0x00   |  2   | num_channels       | u16 big-endian
//! 0x02   |  4   | num_sample_frames  | u32 big-endian
//! 0x06   |  2   | sample_size        | Bits per sample, u16 big-endian
//! 0x08   | 10   | sample_rate        | 80-bit extended float
//! 0x12   |  4   | compression_type   | AIFF-C only
//! 0x16   |  1   | name length        | AIFF-C only, i8, optional
//! 0x17   |  n   | compression_name   | AIFF-C only, optional, padded to even
//! ```
//!
//! Which layout applies is not recorded in the chunk. The caller passes the
//! container variant (see [`FormType`]) along with the chunk header.

use std::io::Cursor;
use std::time::Duration;

use binrw::BinRead;

use crate::chunk_header::ChunkHeader;
use crate::chunk_id::ChunkId;
use crate::error::{AiffError, Result};
use crate::extended::{self, EXTENDED_SIZE};
use crate::form::FormType;
use crate::{io_helpers, pstring};

/// Body offset of the AIFF-C compression type tag
const COMPRESSION_TYPE_OFFSET: usize = 18;

/// Body offset of the AIFF-C compression name pstring
const COMPRESSION_NAME_OFFSET: usize = 22;

/// Fixed fields shared by AIFF and AIFF-C (18 bytes)
#[derive(Debug, Clone, Copy, BinRead)]
#[br(big)]
struct CommonPrefix {
    num_channels: u16,
    num_sample_frames: u32,
    sample_size: u16,
    sample_rate: [u8; EXTENDED_SIZE],
}

/// Decoded Common chunk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonChunk {
    /// Number of audio channels
    pub num_channels: u16,

    /// Number of sample frames in the sound data
    pub num_sample_frames: u32,

    /// Bits per sample
    pub sample_size: u16,

    /// Sample frames per second, rebuilt from the extended float field
    pub sample_rate: u32,

    /// Compression type tag, only set for AIFF-C
    pub compression_type: Option<ChunkId>,

    /// Compression name
    ///
    /// Always [`CommonChunk::PCM`] for plain AIFF. For AIFF-C it is the
    /// decoded pstring, or `None` when the chunk ends right after the
    /// compression type.
    pub compression_name: Option<String>,
}

impl CommonChunk {
    /// Compression name reported for plain AIFF
    pub const PCM: &'static str = "PCM";

    /// Whether the compression type is present and not `NONE`
    #[must_use]
    pub fn is_compressed(&self) -> bool {
        self.compression_type
            .is_some_and(|compression| compression != ChunkId::NONE)
    }

    /// Playback length of the sound data
    ///
    /// Returns `None` when the sample rate is zero.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        if self.sample_rate == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(
            f64::from(self.num_sample_frames) / f64::from(self.sample_rate),
        ))
    }
}

/// Decoder for one Common chunk body.
///
/// Built from the chunk's header and the container variant, it checks the
/// declared size up front and then decodes the body from a byte buffer.
///
/// # Example
///
/// ```rust
/// use aiff_chunk::{decode_chunk_header, ChunkHeader, ChunkId, CommonChunkDecoder};
///
/// let chunk = [
///     b'C', b'O', b'M', b'M', 0x00, 0x00, 0x00, 0x12, // header, 18 body bytes
///     0x00, 0x02, // 2 channels
///     0x00, 0x00, 0x03, 0xE8, // 1000 frames
///     0x00, 0x10, // 16 bits
///     0x40, 0x0E, 0xAC, 0x44, 0, 0, 0, 0, 0, 0, // 44100 Hz
/// ];
///
/// let header = decode_chunk_header(&chunk, 0)?;
/// assert!(header.is_chunk(ChunkId::COMM));
///
/// let decoder = CommonChunkDecoder::new(header, false)?;
/// let common = decoder.decode(&chunk, ChunkHeader::SIZE)?;
/// assert_eq!(common.num_channels, 2);
/// assert_eq!(common.sample_rate, 44100);
/// assert_eq!(common.compression_name.as_deref(), Some("PCM"));
/// # Ok::<(), aiff_chunk::AiffError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonChunkDecoder {
    declared_size: u32,
    is_aifc: bool,
}

impl CommonChunkDecoder {
    /// Smallest Common chunk body in a plain AIFF file
    pub const AIFF_MINIMUM_SIZE: u32 = 18;

    /// Smallest Common chunk body in an AIFF-C file
    pub const AIFC_MINIMUM_SIZE: u32 = 22;

    /// Create a decoder for the chunk described by `header`.
    ///
    /// Fails with [`AiffError::InvalidFormat`] when the declared body size is
    /// below the minimum for the variant (18 bytes for AIFF, 22 for AIFF-C).
    pub fn new(header: ChunkHeader, is_aifc: bool) -> Result<Self> {
        let minimum = Self::minimum_size(is_aifc);
        if header.size < minimum {
            log::warn!(
                "Common chunk declares {} bytes, below the {} byte minimum",
                header.size,
                minimum
            );
            return Err(AiffError::InvalidFormat(format!(
                "Common chunk size should always be at least {minimum}, found {}",
                header.size
            )));
        }

        Ok(Self {
            declared_size: header.size,
            is_aifc,
        })
    }

    /// Create a decoder using the variant named by the FORM type.
    pub fn for_form(header: ChunkHeader, form: FormType) -> Result<Self> {
        Self::new(header, form.is_aifc())
    }

    /// Minimum body size for the variant
    #[must_use]
    pub const fn minimum_size(is_aifc: bool) -> u32 {
        if is_aifc {
            Self::AIFC_MINIMUM_SIZE
        } else {
            Self::AIFF_MINIMUM_SIZE
        }
    }

    /// Number of body bytes the chunk occupies.
    ///
    /// Callers advance past the chunk by this amount, whatever
    /// [`decode`](Self::decode) actually inspected.
    #[must_use]
    pub const fn declared_size(&self) -> u32 {
        self.declared_size
    }

    /// Whether the AIFF-C layout is decoded
    #[must_use]
    pub const fn is_aifc(&self) -> bool {
        self.is_aifc
    }

    /// Decode the Common chunk body starting at `offset` in `buf`.
    ///
    /// `offset` is the first byte after the chunk header.
    pub fn decode(&self, buf: &[u8], offset: usize) -> Result<CommonChunk> {
        let prefix_bytes =
            io_helpers::slice_at(buf, offset, Self::AIFF_MINIMUM_SIZE as usize)?;
        let prefix = CommonPrefix::read(&mut Cursor::new(prefix_bytes))?;

        let mut common = CommonChunk {
            num_channels: prefix.num_channels,
            num_sample_frames: prefix.num_sample_frames,
            sample_size: prefix.sample_size,
            sample_rate: extended::decode_sample_rate(&prefix.sample_rate),
            compression_type: None,
            compression_name: None,
        };

        if self.is_aifc {
            common.compression_type =
                Some(ChunkId::decode(buf, offset + COMPRESSION_TYPE_OFFSET)?);
            if self.declared_size > Self::AIFC_MINIMUM_SIZE {
                common.compression_name = Some(self.decode_compression_name(buf, offset)?);
            }
        } else {
            common.compression_name = Some(CommonChunk::PCM.to_string());
        }

        log::debug!(
            "Common chunk: {} channels, {} frames, {} bits, {} Hz, compression {:?}",
            common.num_channels,
            common.num_sample_frames,
            common.sample_size,
            common.sample_rate,
            common.compression_type.map(|id| id.as_str())
        );

        Ok(common)
    }

    /// The pstring must account exactly for the bytes the chunk declares
    /// beyond the fixed AIFF-C fields.
    fn decode_compression_name(&self, buf: &[u8], offset: usize) -> Result<String> {
        let name_offset = offset + COMPRESSION_NAME_OFFSET;
        let str_len = io_helpers::read_i8(buf, name_offset)?;
        let expected_size = i64::from(pstring::field_size(str_len))
            + i64::from(Self::AIFC_MINIMUM_SIZE);

        let len = match usize::try_from(str_len) {
            Ok(len) if expected_size == i64::from(self.declared_size) => len,
            _ => {
                log::warn!(
                    "Compression name of {} bytes does not fill Common chunk of {} bytes",
                    str_len,
                    self.declared_size
                );
                return Err(AiffError::InvalidFormat(format!(
                    "Illegal pstring length {str_len} for Common chunk of {} bytes",
                    self.declared_size
                )));
            }
        };

        pstring::decode_latin1(buf, name_offset + 1, len)
    }
}
