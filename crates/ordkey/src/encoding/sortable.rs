//! Sort-order preserving (index) encoding for scalar values.
//!
//! The index encoding of a scalar compares bytewise in the same order as
//! the value itself, so concatenations of index encodings work directly as
//! keys in an ordered key-value store.
//!
//! # Encoding design
//!
//! Kinds are ordered by their type tag: `Null < Bool < Int < Float <
//! Bytes/String < Decimal` (the string variant bit puts raw bytes before
//! text). Within a kind:
//!
//! - Numbers reuse their standard head byte and payload — the complemented
//!   width field in the head is what keeps different payload widths
//!   comparable — but the payload is written through the zero-escaper
//!   below.
//! - Strings drop their length field (a length would rank `"ab"` after
//!   `"b"`) and instead write zero-escaped content, terminated by the
//!   reserved pair `0x00 0x00`.
//! - Composites have no total order and are rejected with `NotIndexable`.
//!
//! # Zero escaping
//!
//! Every payload run has its trailing `0x00` bytes stripped, then each
//! maximal run of `k` zero bytes (`k <= 255`) becomes the pair
//! `(0x00, 256-k)`. Longer runs then sort lower (more zeros means a
//! smaller value everywhere except at the end, where zeros are
//! insignificant), and a literal `0x00 0x00` can never appear inside a
//! run, which reserves it as the terminator.

use crate::buffer::Writer;
use crate::error::{Error, Result};
use crate::types::Value;

use super::head::{self, tags};
use super::scalar;

/// The reserved element terminator/separator pair.
pub(crate) const TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Encodes one scalar in index mode into an existing writer. String kinds
/// append their own `0x00 0x00` terminator; every other kind ends after
/// its escaped payload.
///
/// Most callers want [`crate::encode_index`], which handles separators and
/// fence adjustment; this entry point exists for composing custom key
/// layouts.
///
/// # Errors
///
/// Fails with [`Error::NotIndexable`] for composites and with the scalar
/// errors of [`crate::encode`] otherwise.
pub fn encode_index_value(value: &Value, w: &mut Writer) -> Result<()> {
    match value {
        Value::Null => w.push(head::pack(tags::NULL, 0)),
        Value::Bool(b) => w.push(head::pack(tags::BOOL, u8::from(*b) << 3)),
        Value::Int(i) => {
            let (head, word, offset) = scalar::int_parts(*i)?;
            w.push(head)?;
            write_escaped(&word[offset..], w)
        }
        Value::Float(f) => {
            let (head, payload) = scalar::float_parts(*f)?;
            w.push(head)?;
            write_escaped(&payload, w)
        }
        Value::Decimal(d) => {
            let (head, payload) = scalar::decimal_parts(d)?;
            w.push(head)?;
            write_escaped(&payload, w)
        }
        Value::String(s) => {
            w.push(head::pack(tags::STRING, 1 << 3))?;
            write_escaped(s.as_bytes(), w)?;
            w.write(&TERMINATOR)
        }
        Value::Bytes(b) => {
            w.push(head::pack(tags::STRING, 0))?;
            write_escaped(b, w)?;
            w.write(&TERMINATOR)
        }
        Value::List(_) | Value::Tuple(_) | Value::Set(_) | Value::Map(_) => {
            Err(Error::NotIndexable(value.kind()))
        }
    }
}

/// Writes a payload run with trailing zeros stripped and interior zero
/// runs escaped to `(0x00, 256-run_length)`.
pub(crate) fn write_escaped(run: &[u8], w: &mut Writer) -> Result<()> {
    let end = run.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
    let mut rest = &run[..end];
    while !rest.is_empty() {
        let zeros = rest.iter().take_while(|&&b| b == 0).take(255).count();
        if zeros > 0 {
            // Stripping guarantees a non-zero byte follows every run.
            w.write(&[0x00, (zeros as u8).wrapping_neg()])?;
            rest = &rest[zeros..];
            continue;
        }
        let literal = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        w.write(&rest[..literal])?;
        rest = &rest[literal..];
    }
    Ok(())
}
