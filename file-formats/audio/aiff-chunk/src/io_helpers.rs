// io_helpers.rs - Bounds-checked big-endian reads over borrowed byte buffers

use crate::error::{AiffError, Result};

/// Borrow `len` bytes of `buf` starting at `offset`.
pub(crate) fn slice_at(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or(AiffError::UnexpectedEof {
            offset,
            needed: len,
            available: buf.len(),
        })
}

/// Copy a fixed-size array out of `buf` starting at `offset`.
pub(crate) fn array_at<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice_at(buf, offset, N)?);
    Ok(out)
}

pub(crate) fn read_i8(buf: &[u8], offset: usize) -> Result<i8> {
    Ok(i8::from_be_bytes(array_at(buf, offset)?))
}
