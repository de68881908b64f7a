//! Shannon-Fano coding.
//!
//! Codeword lengths come straight from the information content,
//! `L = ceil(-log2 p)`, so the lengths satisfy the Kraft inequality by
//! construction. Each symbol's codeword is the first `L` bits of its
//! cumulative probability in length order: consecutive cumulative
//! values are at least `2^-L` apart, which keeps the truncated
//! prefixes distinct and the code prefix-free.

use crate::bits;
use crate::code::{decode_prefix, Codebook, DecodeTable, Encoded};
use crate::error::Result;
use crate::freq::probabilities;

/// `ceil(-log2 p)`, floored at one bit.
///
/// A lone symbol has `p == 1` and would get length 0, leaving nothing
/// in the stream to count occurrences by; it gets codeword `0`
/// instead.
fn codeword_length(p: f64) -> usize {
    ((-p.log2()).ceil() as usize).max(1)
}

/// Encode `src` with a Shannon-Fano code.
///
/// # Errors
/// Returns [`crate::Error::EmptyInput`] for a zero-length buffer.
pub fn encode(src: &[u8]) -> Result<Encoded> {
    let mut symbols: Vec<(u8, f64, usize)> = probabilities(src)?
        .into_iter()
        .map(|(byte, p)| (byte, p, codeword_length(p)))
        .collect();

    // Increasing length is decreasing probability; the byte value
    // settles ties deterministically.
    symbols.sort_by(|a, b| a.2.cmp(&b.2).then(a.0.cmp(&b.0)));

    let mut book = Codebook::new();
    let mut cumulative = 0.0f64;
    for &(byte, p, len) in &symbols {
        book.assign(byte, bits::fraction_bits(cumulative, len));
        cumulative += p;
    }

    let stream = book.encode_stream(src);
    let (bytes, padding) = bits::pack(&stream);
    Ok(Encoded {
        bytes,
        padding,
        table: book.decode_table(),
    })
}

/// Decode a packed Shannon-Fano stream with its side information.
///
/// # Errors
/// Returns [`crate::Error::InvalidPadding`] for padding outside
/// `0..=7` and [`crate::Error::CorruptInput`] if the stream stops
/// matching the table.
pub fn decode(bytes: &[u8], padding: u8, table: &DecodeTable) -> Result<Vec<u8>> {
    let stream = bits::unpack(bytes, padding)?;
    decode_prefix(&stream, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    #[test]
    fn test_shannon_roundtrip() {
        let data = b"this is an input string";
        let enc = encode(data).unwrap();
        let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_codeword_lengths_match_information_content() {
        // "aab": p(a) = 2/3 -> 1 bit, p(b) = 1/3 -> 2 bits
        let enc = encode(b"aab").unwrap();
        let len_of = |byte: u8| {
            enc.table
                .iter()
                .find(|(_, &b)| b == byte)
                .map(|(code, _)| code.len())
                .unwrap()
        };
        assert_eq!(len_of(b'a'), 1);
        assert_eq!(len_of(b'b'), 2);
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let enc = encode(b"aaaaaa").unwrap();
        let code = enc.table.iter().next().unwrap().0;
        assert_eq!(code, &vec![0u8]);
        let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
        assert_eq!(decoded, b"aaaaaa");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(encode(b""), Err(Error::EmptyInput)));
    }

    proptest! {
        #[test]
        fn prop_shannon_roundtrip(input in prop::collection::vec(any::<u8>(), 1..500)) {
            let enc = encode(&input).unwrap();
            prop_assert!(enc.padding <= 7);
            let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
            prop_assert_eq!(decoded, input);
        }
    }
}
