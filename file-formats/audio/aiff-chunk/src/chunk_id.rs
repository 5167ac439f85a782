//! Chunk identifiers and other 4-byte tags

use binrw::{BinRead, BinWrite};

use crate::error::Result;
use crate::io_helpers;

/// 4-byte tag (OSType) identifying a chunk, a FORM type or an AIFF-C
/// compression type.
///
/// AIFF stores tags in file order, so unlike little-endian chunked formats the
/// bytes are never reversed. Any four bytes are a valid tag; comparison is an
/// exact byte match and no character-set validation is performed.
///
/// # Usage
///
/// ```rust
/// use aiff_chunk::ChunkId;
///
/// let comm = ChunkId::from_str("COMM").unwrap();
/// assert_eq!(comm, ChunkId::COMM);
/// assert_eq!(comm.as_str(), "COMM");
///
/// // Tags are not required to be printable ASCII
/// let raw = ChunkId([0x00, 0xFF, b'a', b' ']);
/// assert_eq!(raw.0, [0x00, 0xFF, b'a', b' ']);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, BinRead, BinWrite)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkId(pub [u8; 4]);

impl ChunkId {
    // Container

    /// Container chunk wrapping the whole file
    pub const FORM: Self = Self(*b"FORM");

    /// FORM type of an uncompressed AIFF file
    pub const AIFF: Self = Self(*b"AIFF");

    /// FORM type of an AIFF-C file
    pub const AIFC: Self = Self(*b"AIFC");

    // Local chunks

    /// Common chunk - channel count, frame count, sample size and rate
    pub const COMM: Self = Self(*b"COMM");

    /// Sound data chunk - sample frames
    pub const SSND: Self = Self(*b"SSND");

    /// Format version chunk (AIFF-C only)
    pub const FVER: Self = Self(*b"FVER");

    /// Marker chunk - positions within the sound data
    pub const MARK: Self = Self(*b"MARK");

    /// Instrument chunk - sampler playback parameters
    pub const INST: Self = Self(*b"INST");

    /// Comments chunk - timestamped comments
    pub const COMT: Self = Self(*b"COMT");

    /// Name chunk
    pub const NAME: Self = Self(*b"NAME");

    /// Author chunk
    pub const AUTH: Self = Self(*b"AUTH");

    /// Annotation chunk
    pub const ANNO: Self = Self(*b"ANNO");

    /// Application-specific chunk
    pub const APPL: Self = Self(*b"APPL");

    // AIFF-C compression types

    /// Uncompressed big-endian PCM
    pub const NONE: Self = Self(*b"NONE");

    /// Uncompressed little-endian PCM
    pub const SOWT: Self = Self(*b"sowt");

    /// 32-bit IEEE floating point
    pub const FL32: Self = Self(*b"fl32");

    /// 64-bit IEEE floating point
    pub const FL64: Self = Self(*b"fl64");

    /// ITU-T G.711 mu-law
    pub const ULAW: Self = Self(*b"ulaw");

    /// ITU-T G.711 A-law
    pub const ALAW: Self = Self(*b"alaw");

    /// IMA 4:1 ADPCM
    pub const IMA4: Self = Self(*b"ima4");

    /// Read a tag verbatim from `buf` at `offset`.
    pub fn decode(buf: &[u8], offset: usize) -> Result<Self> {
        Ok(Self(io_helpers::array_at(buf, offset)?))
    }

    /// Render the tag one byte per character.
    ///
    /// Bytes outside ASCII are mapped through Latin-1, so every tag has a
    /// four-character representation.
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }

    /// Create from a 4-byte string.
    ///
    /// Returns `None` if `s` is not exactly four bytes long.
    ///
    /// ```rust
    /// use aiff_chunk::ChunkId;
    ///
    /// assert_eq!(ChunkId::from_str("SSND"), Some(ChunkId::SSND));
    /// assert!(ChunkId::from_str("SND").is_none());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let bytes: [u8; 4] = s.as_bytes().try_into().ok()?;
        Some(Self(bytes))
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
