//! Codeword tables shared by the prefix coders.
//!
//! Huffman, Shannon-Fano, and Fano differ only in how they assign
//! codewords; once a byte -> bit-string table exists, rendering the
//! stream and decoding it greedily are identical. Both live here.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Codeword -> byte table, the exact inverse of the [`Codebook`] that
/// produced it. Keys are prefix-free, which is what makes greedy
/// left-to-right decoding unambiguous.
pub type DecodeTable = HashMap<Vec<u8>, u8>;

/// Output of a prefix coder's `encode`: packed bytes, byte-alignment
/// padding, and the table needed to invert the stream.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Packed codeword stream.
    pub bytes: Vec<u8>,
    /// Trailing zero bits added for byte alignment (0..=7).
    pub padding: u8,
    /// Bit string -> byte inverse table.
    pub table: DecodeTable,
}

/// Byte -> codeword table in the encode direction.
///
/// Indexed by byte value. Entries for bytes absent from the input stay
/// empty and are never consulted, since every byte of the source
/// appeared in the model that built the table.
#[derive(Debug, Clone)]
pub struct Codebook {
    codes: Vec<Vec<u8>>, // byte -> bit string
}

impl Codebook {
    /// Create an empty codebook covering the full byte alphabet.
    pub fn new() -> Self {
        Self {
            codes: vec![Vec::new(); 256],
        }
    }

    /// Assign `code` to `byte`.
    pub fn assign(&mut self, byte: u8, code: Vec<u8>) {
        self.codes[byte as usize] = code;
    }

    /// Codeword assigned to `byte` (empty if unassigned).
    pub fn code(&self, byte: u8) -> &[u8] {
        &self.codes[byte as usize]
    }

    /// Concatenate per-byte codewords in input order.
    pub fn encode_stream(&self, src: &[u8]) -> Vec<u8> {
        let mut bits = Vec::new();
        for &b in src {
            bits.extend_from_slice(&self.codes[b as usize]);
        }
        bits
    }

    /// Invert into the decode direction.
    pub fn decode_table(&self) -> DecodeTable {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(b, code)| (code.clone(), b as u8))
            .collect()
    }
}

impl Default for Codebook {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy left-to-right prefix decoding.
///
/// Accumulates bits until the buffer exactly matches a table entry,
/// emits the byte, and resets. Prefix-freeness guarantees a match is
/// never a strict prefix of a longer valid codeword, so emitting on
/// first match is correct.
///
/// # Errors
/// Returns [`Error::CorruptInput`] if bits remain unmatched when the
/// stream ends.
pub fn decode_prefix(bits: &[u8], table: &DecodeTable) -> Result<Vec<u8>> {
    let mut decoded = Vec::new();
    let mut buffer = Vec::new();
    for &bit in bits {
        buffer.push(bit);
        if let Some(&byte) = table.get(&buffer) {
            decoded.push(byte);
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        return Err(Error::CorruptInput {
            position: bits.len() - buffer.len(),
        });
    }
    Ok(decoded)
}
