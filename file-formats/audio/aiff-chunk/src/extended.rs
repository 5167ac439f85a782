//! Sample rate recovery from the 80-bit extended float of the Common chunk.
//!
//! The `sampleRate` field is an IEEE 754 80-bit extended-precision number:
//! a sign bit and 15-bit biased exponent in the first two bytes, followed by a
//! 64-bit mantissa with an explicit integer bit. Rather than a full float
//! decode, the rate is rebuilt from the exponent and the top 16 bits of the
//! mantissa with a single shift.
//!
//! An exponent field of [`EXPONENT_BIAS`] (16383 + 15) means the top 16 mantissa
//! bits already hold the integer rate. Every exponent step above or below
//! doubles or halves it. All common rates (8 kHz up to 768 kHz) are integers
//! whose significant bits fit in those 16 bits, so the result is exact for
//! them.
//!
//! Limitations, kept as-is so existing outputs stay stable:
//!
//! - the sign bit is not masked, so negative values produce huge shifts
//! - mantissa bits below the top 16 are ignored (no fractional rates)
//! - NaN and infinity are not recognized
//! - shift amounts wrap modulo 32, like a 32-bit shift instruction
//!
//! Reference: <https://cycling74.com/forums/aiffs-80-bit-sample-rate-value>

/// Exponent field value at which the top 16 mantissa bits equal the rate.
pub const EXPONENT_BIAS: i32 = 16398;

/// Size of the extended-precision field in bytes.
pub const EXTENDED_SIZE: usize = 10;

/// Rebuild the sample rate from a raw 10-byte extended field.
///
/// ```rust
/// use aiff_chunk::decode_sample_rate;
///
/// // 44100 Hz as written by most encoders
/// let field = [0x40, 0x0E, 0xAC, 0x44, 0, 0, 0, 0, 0, 0];
/// assert_eq!(decode_sample_rate(&field), 44100);
/// ```
#[must_use]
pub fn decode_sample_rate(field: &[u8; EXTENDED_SIZE]) -> u32 {
    let exponent = u16::from_be_bytes([field[0], field[1]]);
    let mantissa_high = u16::from_be_bytes([field[2], field[3]]);
    sample_rate_from_parts(exponent, mantissa_high)
}

/// Rebuild the sample rate from the exponent field and the top 16 mantissa bits.
#[must_use]
pub fn sample_rate_from_parts(exponent: u16, mantissa_high: u16) -> u32 {
    let shift = i32::from(exponent) - EXPONENT_BIAS;
    let base = u32::from(mantissa_high);

    log::trace!("Sample rate shift {shift} applied to {base}");

    if shift < 0 {
        base.wrapping_shr(shift.unsigned_abs())
    } else {
        base.wrapping_shl(shift.unsigned_abs())
    }
}
