//! FORM type detection.
//!
//! The FORM container's type tag decides whether the file is plain AIFF or
//! AIFF-C, which in turn changes the layout of the Common chunk. The chunk
//! itself carries no such marker.

use std::fmt;

use crate::chunk_id::ChunkId;

/// Variant of the container, taken from the FORM type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormType {
    /// `AIFF` - uncompressed audio
    Aiff,
    /// `AIFC` - AIFF-C, possibly compressed audio
    Aifc,
}

impl FormType {
    /// Map a FORM type tag to a variant, `None` for anything else.
    #[must_use]
    pub fn from_id(id: ChunkId) -> Option<Self> {
        match id {
            ChunkId::AIFF => Some(Self::Aiff),
            ChunkId::AIFC => Some(Self::Aifc),
            _ => None,
        }
    }

    /// The FORM type tag of this variant
    #[must_use]
    pub const fn id(self) -> ChunkId {
        match self {
            Self::Aiff => ChunkId::AIFF,
            Self::Aifc => ChunkId::AIFC,
        }
    }

    /// Whether Common chunks in this container carry compression fields
    #[must_use]
    pub const fn is_aifc(self) -> bool {
        matches!(self, Self::Aifc)
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aiff => write!(f, "AIFF"),
            Self::Aifc => write!(f, "AIFF-C"),
        }
    }
}
