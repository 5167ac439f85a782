//! Pascal string fields.
//!
//! A pstring is a count byte followed by that many characters, padded with one
//! zero byte when needed so the whole field has an even length. The AIFF-C
//! Common chunk uses one for the human-readable compression name.

use crate::error::Result;
use crate::io_helpers;

/// Number of bytes a pstring with `len` characters occupies, count byte and
/// pad byte included.
///
/// The count is signed, as it is read from the file. The padding follows the
/// remainder of `len + 1` with the sign of the dividend, so negative counts
/// never produce a positive field size.
#[must_use]
pub fn field_size(len: i8) -> i32 {
    let len = i32::from(len);
    let padding = (len + 1) % 2;
    1 + len + padding
}

/// Decode `len` bytes at `offset` one byte per character.
///
/// No multi-byte decoding is done; each byte maps to the Unicode code point of
/// the same value (ISO 8859-1).
pub fn decode_latin1(buf: &[u8], offset: usize, len: usize) -> Result<String> {
    let bytes = io_helpers::slice_at(buf, offset, len)?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}
