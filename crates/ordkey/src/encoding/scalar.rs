//! Scalar payload construction shared by the standard and index encodings.
//!
//! Both encodings emit bit-identical head bytes and payloads for the
//! numeric kinds; they differ only in how the payload bytes are written
//! (raw versus zero-escaped). The helpers here build the `(head, payload)`
//! pairs so the two paths cannot drift apart.

use crate::error::{Error, Result};
use crate::types::Decimal;

use super::head::{self, tags};
use super::width::{flip_if, minimal_width, pow2_selector};

/// High bit of an `f64`'s bit pattern.
const F64_SIGN: u64 = 0x8000_0000_0000_0000;

/// An integer's head byte plus its big-endian 8-byte form and the offset
/// of the first transmitted byte.
pub(crate) fn int_parts(value: i128) -> Result<(u8, [u8; 8], usize)> {
    let positive = value >= 0;
    let word = if positive {
        u64::try_from(value).map_err(|_| Error::IntOutOfRange(value))?
    } else {
        i64::try_from(value).map_err(|_| Error::IntOutOfRange(value))? as u64
    };
    let (offset, _) = minimal_width(word, positive);
    let head = head::pack_num(tags::INT, positive, offset, positive);
    Ok((head, word.to_be_bytes(), offset))
}

/// A float's head byte plus its order-transformed 8-byte payload.
///
/// The sign bit is flipped unconditionally, and for originally-negative
/// values the remaining 63 bits are complemented as well, so the payload
/// compares as an unsigned integer in the same order as the float. NaN has
/// no place in that order and is rejected.
pub(crate) fn float_parts(value: f64) -> Result<(u8, [u8; 8])> {
    if value.is_nan() {
        return Err(Error::Unsupported("NaN float"));
    }
    let bits = value.to_bits();
    let transformed = bits ^ (flip_if(bits & F64_SIGN == 0, u64::MAX) | F64_SIGN);
    Ok((head::pack(tags::FLOAT, 0x07), transformed.to_be_bytes()))
}

/// Reverses the float payload transform.
pub(crate) fn float_from_payload(payload: [u8; 8]) -> f64 {
    let transformed = u64::from_be_bytes(payload);
    let bits = if transformed & F64_SIGN != 0 { transformed ^ F64_SIGN } else { !transformed };
    f64::from_bits(bits)
}

/// A decimal's head byte plus its payload: the minimally-wide exponent
/// followed by base-100 digit bytes, every payload byte complemented for
/// negative values. The special forms use reserved head/first-byte
/// patterns that sit at the extremes of the widest exponent classes.
pub(crate) fn decimal_parts(value: &Decimal) -> Result<(u8, Vec<u8>)> {
    let (negative, exponent, digits) = match value {
        Decimal::NegInfinity => return Ok((head::pack_exp(false, true, 3), vec![0x00])),
        Decimal::Infinity => return Ok((head::pack_exp(true, true, 3), vec![0xFF])),
        Decimal::Finite { negative, exponent, digits } => (*negative, *exponent, digits.as_slice()),
    };

    // Trailing zero digits carry no information and must not be encoded.
    let digits = match digits.iter().rposition(|&d| d != 0) {
        Some(last) => &digits[..=last],
        None => {
            // Zero: reserved patterns adjacent to the sign boundary.
            return if negative {
                Ok((head::pack_exp(false, false, 3), vec![0xFF]))
            } else {
                Ok((head::pack_exp(true, false, 3), vec![0x00]))
            };
        }
    };
    if digits.iter().any(|&d| d > 9) {
        return Err(Error::Unsupported("decimal digit out of range"));
    }
    if digits[0] == 0 {
        return Err(Error::Unsupported("denormalized decimal digit string"));
    }

    let positive = !negative;
    let exp_positive = exponent >= 0;
    let (_, min_width) = minimal_width(exponent as u64, exp_positive);
    let selector = pow2_selector(min_width);
    let width = 1usize << selector;
    let head = head::pack_exp(positive, exp_positive, selector);

    let mut payload = Vec::with_capacity(width + digits.len() / 2 + 1);
    let exp_bytes = flip_if(negative, exponent as u64).to_be_bytes();
    payload.extend_from_slice(&exp_bytes[8 - width..]);
    pack_digits(digits, negative, &mut payload);
    Ok((head, payload))
}

/// Packs decimal digits two per byte: `((10*hi + lo) << 1) | continuation`,
/// continuation set on every byte but the last, the whole byte complemented
/// for negative values (larger magnitudes must sort earlier).
fn pack_digits(digits: &[u8], negative: bool, out: &mut Vec<u8>) {
    let mut pairs = digits.chunks(2).peekable();
    while let Some(pair) = pairs.next() {
        let packed = 10 * pair[0] + pair.get(1).copied().unwrap_or(0);
        let byte = (packed << 1) | u8::from(pairs.peek().is_some());
        out.push(if negative { !byte } else { byte });
    }
}

/// Unpacks base-100 digit bytes from `reader` until the continuation bit
/// clears, dropping the final pad digit of odd-length strings.
pub(crate) fn unpack_digits(
    reader: &mut crate::buffer::Reader<'_>,
    negative: bool,
) -> Result<Vec<u8>> {
    let mut digits = Vec::new();
    loop {
        let offset = reader.offset();
        let raw = reader.read_byte()?;
        let byte = if negative { !raw } else { raw };
        let packed = byte >> 1;
        if packed > 99 {
            return Err(Error::Corrupt { offset, byte: raw });
        }
        digits.push(packed / 10);
        digits.push(packed % 10);
        if byte & 1 == 0 {
            break;
        }
    }
    // Normalized digit strings never end in zero, so a trailing zero is
    // always the pad of an odd-length string.
    if digits.last() == Some(&0) {
        digits.pop();
    }
    Ok(digits)
}
