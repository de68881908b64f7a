//! Lempel-Ziv-Welch dictionary coding.
//!
//! Unlike the frequency-based coders, LZW makes no upfront pass: a
//! dictionary of byte sequences grows during a single forward scan,
//! and the output is a stream of dictionary indices rather than
//! per-symbol codewords. The decoder never receives the dictionary;
//! it replays the same construction from the code stream itself.

use std::collections::HashMap;

use crate::bits;
use crate::error::{Error, Result};

/// Narrowest framing width: the 256 seed codes plus room to grow.
const MIN_BIT_WIDTH: u32 = 9;

/// Output of [`encode`].
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Packed code stream.
    pub bytes: Vec<u8>,
    /// Trailing zero bits added for byte alignment (0..=7).
    pub padding: u8,
    /// Fixed width, in bits, of every rendered code. Sized to the
    /// final dictionary, never below 9.
    pub bit_width: u32,
}

/// Single forward pass producing the code stream and the final
/// dictionary size.
///
/// The dictionary starts with the 256 single-byte sequences (codes
/// 0..=255) and gains exactly one entry per unseen extension, so every
/// emitted code is below the dictionary size at emission time.
fn compress(src: &[u8]) -> (Vec<u32>, usize) {
    let mut dict: HashMap<Vec<u8>, u32> = (0..=255u8).map(|b| (vec![b], u32::from(b))).collect();
    let mut next_code = 256u32;
    let mut codes = Vec::new();
    let mut curr: Vec<u8> = Vec::new();

    for &b in src {
        let mut extended = curr.clone();
        extended.push(b);
        if dict.contains_key(&extended) {
            curr = extended;
        } else {
            codes.push(dict[&curr]);
            dict.insert(extended, next_code);
            next_code += 1;
            curr = vec![b];
        }
    }
    if !curr.is_empty() {
        codes.push(dict[&curr]);
    }

    (codes, dict.len())
}

/// Encode `src` by adaptive dictionary substitution.
///
/// Every code is rendered at one fixed width, the bit length of the
/// final dictionary size (at least 9). Defined for empty input, which
/// encodes to an empty buffer.
pub fn encode(src: &[u8]) -> Encoded {
    let (codes, dict_len) = compress(src);

    // bit length of dict_len, i.e. max(9, ceil(log2(dict_len + 1)))
    // since the dictionary never shrinks below its 256 seed entries
    let bit_width = 32 - (dict_len as u32).leading_zeros();

    let mut stream = Vec::with_capacity(codes.len() * bit_width as usize);
    for code in codes {
        for shift in (0..bit_width).rev() {
            stream.push(((code >> shift) & 1) as u8);
        }
    }

    let (bytes, padding) = bits::pack(&stream);
    Encoded {
        bytes,
        padding,
        bit_width,
    }
}

/// Decode a packed LZW stream by replaying dictionary construction.
///
/// Each recovered code is looked up in a dictionary rebuilt in
/// lock-step with emission. A code equal to the current dictionary
/// size refers to the entry about to be inserted; its expansion is the
/// previous sequence plus that sequence's own first byte (the one-code
/// decode lag).
///
/// # Errors
/// - [`Error::InvalidPadding`] for padding outside `0..=7`.
/// - [`Error::InvalidBitWidth`] if `bit_width < 9` or the unpacked bit
///   count is not a multiple of `bit_width`.
/// - [`Error::CorruptInput`] for a code beyond the replayed
///   dictionary.
pub fn decode(bytes: &[u8], padding: u8, bit_width: u32) -> Result<Vec<u8>> {
    let stream = bits::unpack(bytes, padding)?;
    if bit_width < MIN_BIT_WIDTH || stream.len() % bit_width as usize != 0 {
        return Err(Error::InvalidBitWidth {
            width: bit_width,
            bit_len: stream.len(),
        });
    }

    let mut dict: Vec<Vec<u8>> = (0..=255u8).map(|b| vec![b]).collect();
    let mut decoded = Vec::new();
    let mut prev: Option<Vec<u8>> = None;

    for (i, group) in stream.chunks(bit_width as usize).enumerate() {
        let code = group.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit)) as usize;
        let seq = if code < dict.len() {
            dict[code].clone()
        } else if code == dict.len() {
            match &prev {
                // The code names the entry being built right now:
                // prev + prev[0].
                Some(p) => {
                    let mut seq = p.clone();
                    seq.push(p[0]);
                    seq
                }
                None => {
                    return Err(Error::CorruptInput {
                        position: i * bit_width as usize,
                    })
                }
            }
        } else {
            return Err(Error::CorruptInput {
                position: i * bit_width as usize,
            });
        };

        if let Some(p) = prev {
            let mut entry = p;
            entry.push(seq[0]);
            dict.push(entry);
        }
        decoded.extend_from_slice(&seq);
        prev = Some(seq);
    }

    Ok(decoded)
}
