//! Encoding and decoding traits.

use crate::buffer::Writer;
use crate::error::Result;

/// A type which can be encoded to bytes.
pub trait Encoder: Sized {
    /// Encode this value to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails (e.g. an unsupported value).
    fn encode(&self) -> Result<Vec<u8>>;

    /// Encode this value into an existing writer.
    ///
    /// Appending into a shared writer is more efficient when encoding
    /// multiple values back to back.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    fn encode_to(&self, buf: &mut Writer) -> Result<()>;
}

/// A type which can be decoded from bytes.
pub trait Decoder: Sized {
    /// Decode a value from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails (truncated or corrupt input).
    fn decode(bytes: &[u8]) -> Result<Self>;
}

/// Format version of the encodings in this crate.
///
/// Encodings are not guaranteed stable across versions that add type tags.
pub const FORMAT_VERSION: u8 = 1;
