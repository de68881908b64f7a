//! Byte frequency model and entropy measurement.
//!
//! Huffman, Shannon-Fano, and Fano all start from the same empirical
//! model: occurrence counts per distinct byte and the probabilities
//! they induce. LZW is adaptive and never consults this module.

use crate::error::{Error, Result};

/// Count occurrences of each byte value in a single pass.
pub fn byte_counts(data: &[u8]) -> [u32; 256] {
    let mut counts = [0u32; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    counts
}

/// Empirical probability of each distinct byte, in ascending byte
/// order.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for a zero-length buffer, where
/// `count / len` is undefined.
pub fn probabilities(data: &[u8]) -> Result<Vec<(u8, f64)>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    let len = data.len() as f64;
    Ok(byte_counts(data)
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(b, &c)| (b as u8, f64::from(c) / len))
        .collect())
}

/// Shannon entropy of a buffer, in bits per symbol.
///
/// Returns `0.0` for an empty buffer. This is a reporting utility for
/// evaluating how close a coder gets to the entropy bound; no coder
/// consults it.
pub fn entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let len = data.len() as f64;
    byte_counts(data)
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = f64::from(c) / len;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_counts() {
        let counts = byte_counts(b"abracadabra");
        assert_eq!(counts[b'a' as usize], 5);
        assert_eq!(counts[b'b' as usize], 2);
        assert_eq!(counts[b'r' as usize], 2);
        assert_eq!(counts[b'c' as usize], 1);
        assert_eq!(counts[b'd' as usize], 1);
        assert_eq!(counts[b'z' as usize], 0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let probs = probabilities(b"this is an input string").unwrap();
        let sum: f64 = probs.iter().map(|&(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_empty_input() {
        assert!(matches!(probabilities(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_entropy_uniform_pair_is_one_bit() {
        assert!((entropy(b"abab") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_degenerate_is_zero() {
        assert_eq!(entropy(b"aaaa"), 0.0);
        assert_eq!(entropy(b""), 0.0);
    }
}
