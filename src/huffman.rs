//! Huffman coding.
//!
//! Builds a minimum-redundancy prefix code by greedily merging the two
//! lowest-count nodes until a single tree remains. The tree exists
//! only long enough to derive the codeword table; the table, not the
//! tree, is what travels to the decode side.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at
//! MIT. The bottom-up greedy merge is provably optimal among prefix
//! codes, unlike the top-down Fano partition it displaced.

use std::collections::BinaryHeap;

use crate::bits;
use crate::code::{decode_prefix, Codebook, DecodeTable, Encoded};
use crate::error::{Error, Result};
use crate::freq::byte_counts;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf {
        byte: u8,
        count: u32,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        count: u32,
    },
}

impl Node {
    fn count(&self) -> u32 {
        match self {
            Node::Leaf { count, .. } => *count,
            Node::Internal { count, .. } => *count,
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.count().cmp(&self.count()) // Min-priority queue
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Merge leaves bottom-up until one root remains.
///
/// Ties on count are broken by heap order, which is deterministic for
/// the fixed 0..=255 insertion sequence; any consistent tie-break
/// yields an optimal tree.
fn build_tree(counts: &[u32; 256]) -> Option<Node> {
    let mut heap = BinaryHeap::new();
    for (b, &count) in counts.iter().enumerate() {
        if count > 0 {
            heap.push(Node::Leaf {
                byte: b as u8,
                count,
            });
        }
    }

    while heap.len() > 1 {
        let left = heap.pop().unwrap();
        let right = heap.pop().unwrap();
        let count = left.count() + right.count();
        heap.push(Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            count,
        });
    }

    heap.pop()
}

fn assign_codes(node: &Node, prefix: Vec<u8>, book: &mut Codebook) {
    match node {
        Node::Leaf { byte, .. } => {
            // A single-leaf tree has an empty root path; that byte
            // still needs one bit per occurrence so the stream length
            // stays recoverable.
            book.assign(*byte, if prefix.is_empty() { vec![0] } else { prefix });
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            assign_codes(left, left_prefix, book);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            assign_codes(right, right_prefix, book);
        }
    }
}

/// Encode `src` with a minimum-redundancy prefix code.
///
/// Returns the packed stream, its padding, and the decode table.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for a zero-length buffer.
pub fn encode(src: &[u8]) -> Result<Encoded> {
    if src.is_empty() {
        return Err(Error::EmptyInput);
    }

    let counts = byte_counts(src);
    let mut book = Codebook::new();
    if let Some(root) = build_tree(&counts) {
        assign_codes(&root, Vec::new(), &mut book);
    }

    let stream = book.encode_stream(src);
    let (bytes, padding) = bits::pack(&stream);
    Ok(Encoded {
        bytes,
        padding,
        table: book.decode_table(),
    })
}

/// Decode a packed Huffman stream with its side information.
///
/// # Errors
/// Returns [`Error::InvalidPadding`] for padding outside `0..=7` and
/// [`Error::CorruptInput`] if the stream stops matching the table.
pub fn decode(bytes: &[u8], padding: u8, table: &DecodeTable) -> Result<Vec<u8>> {
    let stream = bits::unpack(bytes, padding)?;
    decode_prefix(&stream, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_huffman_roundtrip() {
        let data = b"abracadabra";
        let enc = encode(data).unwrap();
        let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(encode(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let enc = encode(b"aaaaaa").unwrap();
        let code = enc.table.iter().find(|(_, &b)| b == b'a').unwrap().0;
        assert_eq!(code, &vec![0u8]);
        // 6 one-bit codewords pack into a single byte with 2 pad bits
        assert_eq!(enc.bytes.len(), 1);
        assert_eq!(enc.padding, 2);
        let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
        assert_eq!(decoded, b"aaaaaa");
    }

    #[test]
    fn test_frequent_symbol_gets_shorter_code() {
        let data = b"this is an input string";
        let enc = encode(data).unwrap();
        let len_of = |byte: u8| {
            enc.table
                .iter()
                .find(|(_, &b)| b == byte)
                .map(|(code, _)| code.len())
                .unwrap()
        };
        // ' ' occurs 4 times, 't' 3 times
        assert!(len_of(b' ') <= len_of(b't'));
    }

    #[test]
    fn test_out_of_range_padding_rejected() {
        let enc = encode(b"abcabcabc").unwrap();
        assert!(matches!(
            decode(&enc.bytes, 8, &enc.table),
            Err(Error::InvalidPadding(8))
        ));
    }

    proptest! {
        #[test]
        fn prop_huffman_roundtrip(input in prop::collection::vec(any::<u8>(), 1..500)) {
            let enc = encode(&input).unwrap();
            prop_assert!(enc.padding <= 7);
            let decoded = decode(&enc.bytes, enc.padding, &enc.table).unwrap();
            prop_assert_eq!(decoded, input);
        }
    }
}
