//! Error types for the entropy coders.

use thiserror::Error;

/// Error variants for encode/decode operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer is empty; frequency-based coders have no
    /// symbols to model.
    #[error("cannot encode an empty input")]
    EmptyInput,

    /// The bit stream stopped matching the decode table, or an LZW
    /// code referenced a dictionary entry that cannot exist yet.
    #[error("corrupt input: no codeword matches at bit {position}")]
    CorruptInput {
        /// Bit offset of the first unmatched bit.
        position: usize,
    },

    /// Padding count outside `0..=7`, or nonzero for an empty buffer.
    #[error("invalid padding: {0}")]
    InvalidPadding(u8),

    /// An LZW bit width that cannot frame the code stream.
    #[error("bit width {width} cannot frame a stream of {bit_len} bits")]
    InvalidBitWidth {
        /// The width supplied by the caller.
        width: u32,
        /// Total unpacked bit count of the stream.
        bit_len: usize,
    },
}

/// A specialized Result type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;
