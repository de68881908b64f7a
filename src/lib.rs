//! # Prefix and Dictionary Entropy Coding
//!
//! *Four classic lossless coders over one bit-packing substrate.*
//!
//! ## Intuition First
//!
//! A byte stream spends eight bits on every symbol whether it is rare
//! or ubiquitous. Entropy coding spends bits where the information is:
//! frequent symbols get short codewords, rare symbols long ones, and
//! as long as no codeword is a prefix of another the stream needs no
//! delimiters at all. The decoder just reads bits until a codeword
//! completes, emits the symbol, and repeats.
//!
//! LZW takes the other road: instead of shortening symbols it
//! lengthens them, replacing whole repeated byte sequences with
//! dictionary indices discovered on the fly.
//!
//! ## The Problem
//!
//! Every coder here carries the same obligation: produce an
//! unambiguous bit representation and reconstruct the original bytes
//! from it exactly. They differ completely in how codewords are
//! assigned, and that assignment is where correctness lives: a
//! non-prefix-free table, a misaligned bit width, or a stale
//! dictionary corrupts data silently rather than crashing.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon      Entropy as the fundamental limit; cumulative-
//!                    probability codeword assignment
//! 1949  Fano         Top-down recursive probability-mass partitioning
//! 1952  Huffman      Bottom-up greedy merge: provably optimal prefix
//!                    codes, displacing Fano's heuristic
//! 1978  Lempel-Ziv   Dictionary coding without a probability model
//! 1984  Welch        LZW: the pre-seeded 256-entry dictionary variant
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a source with symbol probabilities $p_s$, Shannon's bound says
//! no lossless code beats $H = -\sum_s p_s \log_2 p_s$ bits per
//! symbol. Shannon-Fano assigns lengths $L_s = \lceil -\log_2 p_s
//! \rceil$, landing within one bit of $H$; Huffman's merge achieves
//! the minimum expected length among all prefix codes.
//!
//! ## Complexity Analysis
//!
//! - **Huffman**: $O(k \log k)$ table construction for $k$ distinct
//!   bytes, $O(n)$ encode/decode.
//! - **Shannon-Fano / Fano**: $O(k \log k)$ sort plus $O(k^2)$ worst
//!   case partitioning, $O(n)$ encode/decode.
//! - **LZW**: $O(n)$ amortized with hashed sequence lookup.
//!
//! ## Failure Modes
//!
//! 1. **Lost side information**: padding counts, decode tables, and
//!    LZW bit widths are part of the wire format; bytes alone cannot
//!    be decoded.
//! 2. **Degenerate alphabets**: a single distinct byte would naively
//!    get a zero-length codeword; every coder pins it to one bit.
//!
//! ## Implementation Notes
//!
//! All operations are whole-buffer, single-pass, and synchronous.
//! Each call owns its working state (tree, tables, dictionary)
//! exclusively and shares nothing across calls, so concurrent calls
//! on different inputs need no synchronization.
//!
//! ## References
//!
//! - Shannon, C. (1948). "A Mathematical Theory of Communication."
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Welch, T. (1984). "A Technique for High-Performance Data
//!   Compression."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod error;
pub mod fano;
pub mod freq;
pub mod huffman;
pub mod lzw;
pub mod shannon;

pub use code::{Codebook, DecodeTable, Encoded};
pub use error::{Error, Result};
pub use freq::entropy;
