//! Decoder for AIFF and AIFF-C chunk headers and Common chunks
//!
//! AIFF (Audio Interchange File Format) is a chunked container: every chunk
//! starts with an 8-byte header holding a 4-byte tag and a big-endian body
//! length. The Common (`COMM`) chunk describes the sampled sound, and in
//! AIFF-C files additionally names the compression in use.
//!
//! This crate decodes those two structures from borrowed byte buffers. Walking
//! the chunk tree, reading sound data and file I/O are left to the caller,
//! which supplies buffers and offsets and consumes the decoded values.
//!
//! ## Features
//!
//! - Decode chunk headers at any buffer offset
//! - Decode AIFF and AIFF-C Common chunks, including the compression name
//! - Rebuild integer sample rates from the 80-bit extended float field
//! - Optional `serde` support for the decoded types
//!
//! ## Example
//!
//! ```
//! use aiff_chunk::{decode_chunk_header, ChunkHeader, ChunkId, CommonChunkDecoder, FormType};
//!
//! # fn main() -> Result<(), aiff_chunk::AiffError> {
//! let form_type = FormType::from_id(ChunkId::AIFC).expect("AIFF-C container");
//!
//! let chunk = [
//!     b'C', b'O', b'M', b'M', 0x00, 0x00, 0x00, 0x1A, // header, 26 body bytes
//!     0x00, 0x01, 0x00, 0x00, 0x00, 0x10, 0x00, 0x10,
//!     0x40, 0x0E, 0xBB, 0x80, 0, 0, 0, 0, 0, 0, // 48000 Hz
//!     b'i', b'm', b'a', b'4', // compression type
//!     0x03, b'i', b'm', b'a', // compression name
//! ];
//!
//! let header = decode_chunk_header(&chunk, 0)?;
//! if header.is_chunk(ChunkId::COMM) {
//!     let decoder = CommonChunkDecoder::for_form(header, form_type)?;
//!     let common = decoder.decode(&chunk, ChunkHeader::SIZE)?;
//!     assert_eq!(common.sample_rate, 48000);
//!     assert_eq!(common.compression_type, Some(ChunkId::IMA4));
//!     assert_eq!(common.compression_name.as_deref(), Some("ima"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## References
//!
//! - Audio Interchange File Format: "AIFF", Apple Computer, version 1.3
//! - Audio Interchange File Format AIFF-C, Apple Computer, draft 1991

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod chunk_header;
pub mod chunk_id;
pub mod common;
pub mod error;
pub mod extended;
pub mod form;
mod io_helpers;
pub mod pstring;

pub use chunk_header::{ChunkHeader, decode_chunk_header};
pub use chunk_id::ChunkId;
pub use common::{CommonChunk, CommonChunkDecoder};
pub use error::{AiffError, Result};
pub use extended::decode_sample_rate;
pub use form::FormType;
