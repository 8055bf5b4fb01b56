//! Head-byte packing.
//!
//! Every encoded value leads with a single head byte holding a 4-bit type
//! tag and a 4-bit info field. The tag fixes the cross-kind sort order; the
//! info field carries a sign, a variant flag, or a payload width selector,
//! depending on the kind.
//!
//! For the numeric kinds the info field is the order-preserving trick of
//! the whole format: the width selector is complemented for negative
//! values. A negative number's two's-complement magnitude grows as the
//! value becomes more negative, so a plain width field would sort wide
//! (very negative) numbers after narrow ones; complementing it inverts the
//! relation, and the sign bit above it keeps every negative head below
//! every non-negative one.

use super::width::flip_bits3;

/// Type tags, high nibble of the head byte. Their numeric order is the
/// cross-kind sort order of the index encoding.
pub(crate) mod tags {
    /// Null sorts first.
    pub const NULL: u8 = 0;
    /// Booleans, false before true.
    pub const BOOL: u8 = 1;
    /// Integers in `i64::MIN ..= u64::MAX`.
    pub const INT: u8 = 2;
    /// 64-bit floats.
    pub const FLOAT: u8 = 3;
    /// Byte strings and UTF-8 text (variant bit: 1 = text).
    pub const STRING: u8 = 4;
    /// Sequences (variant bit: 1 = tuple-like, 0 = list-like).
    pub const SEQUENCE: u8 = 5;
    /// Sets and mappings (variant bit: 1 = mapping).
    pub const SET: u8 = 6;
    /// Arbitrary-precision decimals.
    pub const DECIMAL: u8 = 7;
}

/// Packs a head byte from a tag and a raw info nibble.
#[inline]
pub(crate) const fn pack(tag: u8, info: u8) -> u8 {
    (tag << 4) | (info & 0x0F)
}

/// Extracts the type tag (high nibble).
#[inline]
pub(crate) const fn tag(head: u8) -> u8 {
    head >> 4
}

/// Extracts bit 3 of the info nibble (sign or variant flag).
#[inline]
pub(crate) const fn flag(head: u8) -> bool {
    head & 0x08 != 0
}

/// Packs a numeric head byte: `flag` in bit 3, the payload offset in bits
/// 2-0. The offset is stored complemented for non-negative numbers (so a
/// smaller offset, i.e. a wider and therefore larger magnitude, yields a
/// larger field) and as-is for negative ones, where wider means more
/// negative and must sort lower.
#[inline]
pub(crate) const fn pack_num(tag: u8, flag: bool, offset: usize, positive: bool) -> u8 {
    pack(tag, ((flag as u8) << 3) | flip_bits3(positive, offset as u8))
}

/// Recovers a payload width from a numeric head byte, undoing the
/// complement for the given sign.
#[inline]
pub(crate) const fn num_width(head: u8, positive: bool) -> usize {
    (flip_bits3(!positive, head) + 1) as usize
}

/// Packs the decimal head byte. The low three bits hold the exponent sign
/// and a two-bit power-of-two width selector for the exponent payload; the
/// selector is complemented when the exponent is negative, and the whole
/// three-bit group is complemented when the value itself is, nesting the
/// same ordering trick twice.
#[inline]
pub(crate) const fn pack_exp(positive: bool, exp_positive: bool, selector: u8) -> u8 {
    let exp_bits = ((exp_positive as u8) << 2) | (flip_bits3(!exp_positive, selector) & 0x03);
    pack(tags::DECIMAL, ((positive as u8) << 3) | flip_bits3(!positive, exp_bits))
}

/// Recovers `(exp_positive, selector)` from a decimal head byte; the value
/// sign comes from [`flag`].
#[inline]
pub(crate) const fn unpack_exp(head: u8) -> (bool, u8) {
    let exp_bits = flip_bits3(!flag(head), head);
    let exp_positive = exp_bits & 0x04 != 0;
    let selector = if exp_positive { exp_bits & 0x03 } else { !exp_bits & 0x03 };
    (exp_positive, selector)
}
