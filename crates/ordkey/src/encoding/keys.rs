//! Index key construction for ordered storage.
//!
//! An index key is the concatenation of scalar index encodings, separated
//! by the reserved pair `0x00 0x00`. String elements end with that pair as
//! their own terminator; after any other element the builder inserts it as
//! a separator, except after the last element. Because escaped content
//! never contains `0x00 0x00` and never ends in `0x00`, the pair is
//! unambiguous and tuple-prefix ordering coincides with byte ordering:
//!
//! ```text
//! key(a)            <  key(a, b)        for every b
//! key(a, b)         <  key(a, c)        whenever b < c
//! key("x")          == key("x\0")       trailing NULs are insignificant
//! ```
//!
//! The successor/predecessor adjustment turns a key into the tightest
//! byte-string fence above or below every key sharing the original tuple
//! as a prefix, the standard construction for half-open range-scan bounds.

use crate::buffer::{BufferConfig, Writer};
use crate::error::{Error, Result};
use crate::types::Value;

use super::sortable::{self, TERMINATOR};

/// Optional neighbor adjustment applied to a finished key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjust {
    /// Return the key as built.
    #[default]
    None,
    /// Shift to the immediate lexicographic successor.
    Successor,
    /// Shift to the immediate lexicographic predecessor.
    Predecessor,
}

/// Build a sortable index key from an ordered tuple of scalar values.
///
/// # Errors
///
/// Fails with [`Error::Empty`] for an empty tuple, [`Error::NotIndexable`]
/// if any element is a composite, and with the scalar encoding errors of
/// [`crate::encode`] otherwise.
///
/// # Example
///
/// ```
/// use ordkey::{encode_index, Adjust, Value};
///
/// let low = encode_index(&[Value::Int(10)], Adjust::None).unwrap();
/// let high = encode_index(&[Value::Int(11)], Adjust::None).unwrap();
/// assert!(low < high);
///
/// // Everything starting with Int(10) scans between the fences.
/// let fence_lo = encode_index(&[Value::Int(10)], Adjust::Predecessor).unwrap();
/// let fence_hi = encode_index(&[Value::Int(10)], Adjust::Successor).unwrap();
/// let inner = encode_index(&[Value::Int(10), Value::from("x")], Adjust::None).unwrap();
/// assert!(fence_lo < inner && inner < fence_hi);
/// ```
pub fn encode_index(values: &[Value], adjust: Adjust) -> Result<Vec<u8>> {
    encode_index_with_config(values, adjust, &BufferConfig::default())
}

/// [`encode_index`] with an explicit buffer policy.
///
/// # Errors
///
/// As [`encode_index`].
pub fn encode_index_with_config(
    values: &[Value],
    adjust: Adjust,
    config: &BufferConfig,
) -> Result<Vec<u8>> {
    if values.is_empty() {
        return Err(Error::Empty);
    }
    let mut writer = Writer::new(config);
    let last = values.len() - 1;
    for (idx, value) in values.iter().enumerate() {
        sortable::encode_index_value(value, &mut writer)?;
        // String encodings carry their own terminator; everything else
        // needs a separator before the next element.
        let is_string = matches!(value, Value::String(_) | Value::Bytes(_));
        if !is_string && idx < last {
            writer.write(&TERMINATOR)?;
        }
    }
    let mut key = writer.finish();
    match adjust {
        Adjust::None => {}
        Adjust::Successor => successor(&mut key),
        Adjust::Predecessor => predecessor(&mut key),
    }
    Ok(key)
}

/// Shifts a key to its immediate lexicographic successor: the last byte is
/// incremented, or the separator pair is appended when it is already
/// `0xFF`. No-op on an empty key.
pub fn successor(key: &mut Vec<u8>) {
    match key.last().copied() {
        None => {}
        Some(0xFF) => key.extend_from_slice(&TERMINATOR),
        Some(byte) => {
            let end = key.len() - 1;
            key[end] = byte + 1;
        }
    }
}

/// Shifts a key to its immediate lexicographic predecessor: the last byte
/// is decremented, or dropped when it is already `0x00`. No-op on an empty
/// key.
pub fn predecessor(key: &mut Vec<u8>) {
    match key.last().copied() {
        None => {}
        Some(0x00) => {
            key.pop();
        }
        Some(byte) => {
            let end = key.len() - 1;
            key[end] = byte - 1;
        }
    }
}
