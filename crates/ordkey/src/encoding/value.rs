//! The standard (self-describing) encoding.
//!
//! Each value is a head byte followed by its payload:
//!
//! - `Null`: head only
//! - `Bool`: head only, the value in the flag bit
//! - `Int`: head + 1-8 trailing bytes of the big-endian two's-complement
//!   form; the width lives in the head byte and the decoder sign-extends
//! - `Float`: head + 8 order-transformed IEEE-754 bytes
//! - `Decimal`: head + order-preserving exponent + base-100 digit bytes
//! - `String`/`Bytes`: head + minimal-width byte length + content
//! - `List`/`Tuple`, `Set`/`Map`: head + minimal-width count + recursively
//!   encoded children (key then value for map entries)
//!
//! The encoding is loss-free: `decode(encode(v)) == v` for every supported
//! value, including signed float zeros and signed decimal zeros.

use crate::buffer::{BufferConfig, Reader, Writer};
use crate::error::{Error, Result};
use crate::types::{Decimal, Value};

use super::head::{self, tags};
use super::scalar;
use super::traits::{Decoder, Encoder};
use super::width::{minimal_width, sign_extend};
use super::MAX_DEPTH;

impl Encoder for Value {
    fn encode(&self) -> Result<Vec<u8>> {
        encode(self)
    }

    fn encode_to(&self, buf: &mut Writer) -> Result<()> {
        encode_value(self, buf, 0)
    }
}

impl Decoder for Value {
    fn decode(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}

/// Encode a value with the default buffer policy.
///
/// # Errors
///
/// Fails with [`Error::Unsupported`] for NaN floats or denormalized
/// decimals, [`Error::IntOutOfRange`] for integers outside
/// `i64::MIN ..= u64::MAX`, [`Error::DepthExceeded`] for pathologically
/// nested values, and [`Error::TooLarge`] when the output would exceed the
/// configured maximum.
///
/// # Example
///
/// ```
/// use ordkey::{decode, encode, Value};
///
/// let value = Value::List(vec![Value::Int(42), Value::from("hi")]);
/// let bytes = encode(&value).unwrap();
/// assert_eq!(decode(&bytes).unwrap(), value);
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    encode_with_config(value, &BufferConfig::default())
}

/// Encode a value with an explicit buffer policy.
///
/// # Errors
///
/// As [`encode`].
pub fn encode_with_config(value: &Value, config: &BufferConfig) -> Result<Vec<u8>> {
    let mut writer = Writer::new(config);
    encode_value(value, &mut writer, 0)?;
    Ok(writer.finish())
}

/// Decode a single value, ignoring any trailing bytes.
///
/// Empty input decodes to [`Value::Null`].
///
/// # Errors
///
/// Fails with [`Error::Truncated`] if the input ends mid-value,
/// [`Error::Corrupt`] on an unrecognized type tag or malformed payload
/// byte, and [`Error::InvalidText`] if a text payload is not UTF-8.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    let (value, _) = decode_value(bytes)?;
    Ok(value)
}

/// Decode a value and return the number of bytes consumed.
///
/// Useful when a value is embedded in a larger buffer.
///
/// # Errors
///
/// As [`decode`], except that empty input is [`Error::Truncated`].
pub fn decode_value(bytes: &[u8]) -> Result<(Value, usize)> {
    let mut reader = Reader::new(bytes);
    let value = decode_from(&mut reader, 0)?;
    Ok((value, reader.offset()))
}

fn encode_value(value: &Value, w: &mut Writer, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(MAX_DEPTH));
    }
    match value {
        Value::Null => w.push(head::pack(tags::NULL, 0)),
        Value::Bool(b) => w.push(head::pack(tags::BOOL, u8::from(*b) << 3)),
        Value::Int(i) => {
            let (head, word, offset) = scalar::int_parts(*i)?;
            w.push(head)?;
            w.write(&word[offset..])
        }
        Value::Float(f) => {
            let (head, payload) = scalar::float_parts(*f)?;
            w.push(head)?;
            w.write(&payload)
        }
        Value::Decimal(d) => {
            let (head, payload) = scalar::decimal_parts(d)?;
            w.push(head)?;
            w.write(&payload)
        }
        Value::String(s) => {
            write_len(w, tags::STRING, true, s.len() as u64)?;
            w.write(s.as_bytes())
        }
        Value::Bytes(b) => {
            write_len(w, tags::STRING, false, b.len() as u64)?;
            w.write(b)
        }
        Value::List(items) | Value::Tuple(items) => {
            let tuple_like = matches!(value, Value::Tuple(_));
            write_len(w, tags::SEQUENCE, tuple_like, items.len() as u64)?;
            for item in items {
                encode_value(item, w, depth + 1)?;
            }
            Ok(())
        }
        Value::Set(items) => {
            write_len(w, tags::SET, false, items.len() as u64)?;
            for item in items {
                encode_value(item, w, depth + 1)?;
            }
            Ok(())
        }
        Value::Map(entries) => {
            write_len(w, tags::SET, true, entries.len() as u64)?;
            for (key, val) in entries {
                encode_value(key, w, depth + 1)?;
                encode_value(val, w, depth + 1)?;
            }
            Ok(())
        }
    }
}

/// Writes a head byte carrying a variant flag and a minimal-width length,
/// then the length's trailing bytes. Lengths are always non-negative, so
/// the width field uses the non-negative complement rule.
fn write_len(w: &mut Writer, tag: u8, flag: bool, len: u64) -> Result<()> {
    let (offset, _) = minimal_width(len, true);
    w.push(head::pack_num(tag, flag, offset, true))?;
    w.write(&len.to_be_bytes()[offset..])
}

/// Reads the length payload following a head byte written by `write_len`.
fn read_len(r: &mut Reader<'_>, head: u8) -> Result<usize> {
    let width = head::num_width(head, true);
    let len = sign_extend(r.read(width)?, true);
    usize::try_from(len).map_err(|_| Error::TooLarge { len, max: usize::MAX as u64 })
}

fn decode_from(r: &mut Reader<'_>, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(MAX_DEPTH));
    }
    let head_offset = r.offset();
    let head = r.read_byte()?;
    match head::tag(head) {
        tags::NULL => Ok(Value::Null),
        tags::BOOL => Ok(Value::Bool(head::flag(head))),
        tags::INT => {
            let positive = head::flag(head);
            let width = head::num_width(head, positive);
            let word = sign_extend(r.read(width)?, positive);
            Ok(Value::Int(if positive { i128::from(word) } else { i128::from(word as i64) }))
        }
        tags::FLOAT => {
            let mut payload = [0u8; 8];
            payload.copy_from_slice(r.read(8)?);
            Ok(Value::Float(scalar::float_from_payload(payload)))
        }
        tags::DECIMAL => Ok(Value::Decimal(decode_decimal(r, head)?)),
        tags::STRING => {
            let len = read_len(r, head)?;
            let content = r.read(len)?;
            if head::flag(head) {
                Ok(Value::String(String::from_utf8(content.to_vec())?))
            } else {
                Ok(Value::Bytes(content.to_vec()))
            }
        }
        tags::SEQUENCE => {
            let items = decode_items(r, head, depth)?;
            if head::flag(head) {
                Ok(Value::Tuple(items))
            } else {
                Ok(Value::List(items))
            }
        }
        tags::SET => {
            if head::flag(head) {
                let count = read_len(r, head)?;
                // A count can never exceed the remaining input length, so
                // hostile counts cannot force a huge allocation.
                let mut entries = Vec::with_capacity(count.min(r.remaining()));
                for _ in 0..count {
                    let key = decode_from(r, depth + 1)?;
                    let val = decode_from(r, depth + 1)?;
                    entries.push((key, val));
                }
                Ok(Value::Map(entries))
            } else {
                Ok(Value::Set(decode_items(r, head, depth)?))
            }
        }
        _ => Err(Error::Corrupt { offset: head_offset, byte: head }),
    }
}

fn decode_items(r: &mut Reader<'_>, head: u8, depth: usize) -> Result<Vec<Value>> {
    let count = read_len(r, head)?;
    let mut items = Vec::with_capacity(count.min(r.remaining()));
    for _ in 0..count {
        items.push(decode_from(r, depth + 1)?);
    }
    Ok(items)
}

/// Decodes a decimal payload. The special forms are recognized from their
/// reserved head/first-byte patterns before the exponent is interpreted.
fn decode_decimal(r: &mut Reader<'_>, head: u8) -> Result<Decimal> {
    let positive = head::flag(head);
    let (exp_positive, selector) = head::unpack_exp(head);
    let width = 1usize << selector;

    let first = r.read_byte()?;
    match (head & 0x0F, first) {
        (0x00, 0x00) => return Ok(Decimal::NegInfinity),
        (0x07, 0xFF) => return Ok(Decimal::zero(true)),
        (0x08, 0x00) => return Ok(Decimal::zero(false)),
        (0x0F, 0xFF) => return Ok(Decimal::Infinity),
        _ => {}
    }

    let mut word = [if exp_positive { 0x00 } else { 0xFF }; 8];
    word[8 - width] = if positive { first } else { !first };
    for slot in &mut word[8 - width + 1..] {
        let byte = r.read_byte()?;
        *slot = if positive { byte } else { !byte };
    }
    let exponent = i64::from_be_bytes(word);

    let digits = scalar::unpack_digits(r, !positive)?;
    Ok(Decimal::Finite { negative: !positive, exponent, digits })
}
