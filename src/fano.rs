//! Fano coding (recursive probability-mass partitioning).
//!
//! Where Shannon-Fano derives lengths first and codewords from
//! cumulative probability, Fano works top-down: sort symbols by
//! probability and recursively split each range where the two halves'
//! probability mass is most nearly equal, appending `0` on the left
//! and `1` on the right. Both yield prefix-free codes, but Fano's
//! local split is not globally optimal the way Huffman's merge is.

use crate::bits;
use crate::code::{decode_prefix, Codebook, DecodeTable, Encoded};
use crate::error::Result;
use crate::freq::probabilities;

struct Symbol {
    byte: u8,
    p: f64,
    code: Vec<u8>,
}

/// Split `symbols[lo..hi]` at the first index minimizing the imbalance
/// `|2 * left_mass - range_mass|`, then recurse on each side.
fn partition(symbols: &mut [Symbol], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    if hi - lo == 2 {
        symbols[lo].code.push(0);
        symbols[lo + 1].code.push(1);
        return;
    }

    let total: f64 = symbols[lo..hi].iter().map(|s| s.p).sum();
    let mut left_mass = 0.0f64;
    let mut best = f64::INFINITY;
    let mut split = lo + 1;
    for (i, s) in symbols[lo..hi].iter().enumerate() {
        left_mass += s.p;
        let imbalance = (2.0 * left_mass - total).abs();
        // strict comparison keeps the first index achieving the minimum
        if imbalance < best {
            best = imbalance;
            split = lo + i + 1;
        }
    }

    for s in &mut symbols[lo..split] {
        s.code.push(0);
    }
    for s in &mut symbols[split..hi] {
        s.code.push(1);
    }
    partition(symbols, lo, split);
    partition(symbols, split, hi);
}

/// Encode `src` with a Fano code.
///
/// # Errors
/// Returns [`crate::Error::EmptyInput`] for a zero-length buffer.
pub fn encode(src: &[u8]) -> Result<Encoded> {
    let mut symbols: Vec<Symbol> = probabilities(src)?
        .into_iter()
        .map(|(byte, p)| Symbol {
            byte,
            p,
            code: Vec::new(),
        })
        .collect();

    symbols.sort_by(|a, b| b.p.total_cmp(&a.p).then(a.byte.cmp(&b.byte)));

    let n = symbols.len();
    if n == 1 {
        // No split to make; the lone byte still needs one bit per
        // occurrence so the stream length stays recoverable.
        symbols[0].code.push(0);
    } else {
        partition(&mut symbols, 0, n);
    }

    let mut book = Codebook::new();
    for s in symbols {
        book.assign(s.byte, s.code);
    }

    let stream = book.encode_stream(src);
    let (bytes, padding) = bits::pack(&stream);
    Ok(Encoded {
        bytes,
        padding,
        table: book.decode_table(),
    })
}

/// Decode a packed Fano stream with its side information.
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
    fn test_fano_roundtrip() {
        let data = b"this is an input string";
        let enc = encode(data).unwrap();
        let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_balanced_split_on_uniform_quad() {
        // Four equiprobable symbols partition into two pairs: every
        // codeword comes out exactly two bits.
        let enc = encode(b"abcd").unwrap();
        assert!(enc.table.keys().all(|code| code.len() == 2));
    }

    #[test]
    fn test_skewed_mass_splits_off_heavy_symbol() {
        // p(a) = 6/10 dominates; the first split isolates it with a
        // one-bit codeword.
        let enc = encode(b"aaaaaabbcd").unwrap();
        let code_a = enc.table.iter().find(|(_, &b)| b == b'a').unwrap().0;
        assert_eq!(code_a.len(), 1);
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
        fn prop_fano_roundtrip(input in prop::collection::vec(any::<u8>(), 1..500)) {
            let enc = encode(&input).unwrap();
            prop_assert!(enc.padding <= 7);
            let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
            prop_assert_eq!(decoded, input);
        }
    }
}
