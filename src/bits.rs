//! Bit-packing primitives shared by every coder.
//!
//! A bit string is a `Vec<u8>` holding one `0`/`1` value per element,
//! MSB-first relative to its packed byte form. Packing always pads to
//! a byte boundary with trailing zeros; the padding count is part of
//! the wire format and must travel with the bytes, since it cannot be
//! recovered from the buffer alone.

use crate::error::{Error, Result};

/// Pack a bit string into bytes, MSB-first.
///
/// Returns the byte buffer and the number of trailing zero bits added
/// to reach a byte boundary (0 when the input is already aligned).
/// The packed length is always `ceil(bits.len() / 8)`.
pub fn pack(bits: &[u8]) -> (Vec<u8>, u8) {
    let padding = ((8 - bits.len() % 8) % 8) as u8;
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    let mut acc = 0u8;
    let mut filled = 0u8;
    for &bit in bits {
        acc = (acc << 1) | (bit & 1);
        filled += 1;
        if filled == 8 {
            bytes.push(acc);
            acc = 0;
            filled = 0;
        }
    }
    if filled > 0 {
        bytes.push(acc << (8 - filled));
    }
    (bytes, padding)
}

/// Unpack bytes into a bit string, dropping the last `padding` bits.
///
/// # Errors
/// Returns [`Error::InvalidPadding`] if `padding > 7`, or if `padding`
/// is nonzero for an empty buffer.
pub fn unpack(bytes: &[u8], padding: u8) -> Result<Vec<u8>> {
    if padding > 7 || (bytes.is_empty() && padding != 0) {
        return Err(Error::InvalidPadding(padding));
    }
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits.truncate(bytes.len() * 8 - padding as usize);
    Ok(bits)
}

/// First `n` bits of the binary expansion of `x` in `[0, 1)`.
///
/// Repeated doubling with truncation, never rounding: the result is
/// exactly the leading `n` bits of the infinite expansion. Used by
/// Shannon-Fano codeword assignment.
pub fn fraction_bits(mut x: f64, n: usize) -> Vec<u8> {
    debug_assert!((0.0..1.0).contains(&x), "fraction {x} outside [0, 1)");
    let mut bits = Vec::with_capacity(n);
    for _ in 0..n {
        x *= 2.0;
        let bit = x as u8;
        bits.push(bit);
        x -= f64::from(bit);
    }
    bits
}
