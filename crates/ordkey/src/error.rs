//! Error types for the codec.

use thiserror::Error;

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding values.
///
/// Every failure is deterministic in the input: retrying without changing
/// the input cannot succeed, so errors carry enough context (offset, byte,
/// offending kind) to diagnose the input instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The value kind is outside the closed set the codec supports.
    #[error("unsupported value: {0}")]
    Unsupported(&'static str),

    /// A composite value was passed to the index encoding, which only
    /// accepts scalars.
    #[error("composite values cannot be index-encoded: {0}")]
    NotIndexable(&'static str),

    /// The input ended in the middle of a value.
    #[error("input truncated at offset {offset}: {needed} more bytes needed")]
    Truncated {
        /// Offset at which the read was attempted.
        offset: usize,
        /// Number of bytes the read still required.
        needed: usize,
    },

    /// An unrecognized or malformed byte was encountered while decoding.
    #[error("corrupt encoding: unrecognized byte {byte:#04x} at offset {offset}")]
    Corrupt {
        /// Offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// A length or count exceeds the configured maximum.
    #[error("encoded size {len} exceeds configured maximum of {max} bytes")]
    TooLarge {
        /// The size that was requested.
        len: u64,
        /// The configured maximum.
        max: u64,
    },

    /// A text payload did not contain valid UTF-8.
    #[error("invalid UTF-8 in text payload: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// An integer falls outside the encodable range
    /// (`i64::MIN ..= u64::MAX`).
    #[error("integer {0} out of encodable range")]
    IntOutOfRange(i128),

    /// Input nesting exceeds the recursion limit.
    #[error("value nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),

    /// An index key was requested for an empty tuple of values.
    #[error("cannot build an index key from an empty tuple")]
    Empty,
}
