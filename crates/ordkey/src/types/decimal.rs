//! Arbitrary-precision decimal numbers.
//!
//! A finite decimal is a sign, an exponent and a digit string, read as
//! `±0.d1 d2 … dn × 10^(exponent+1)` — the exponent is the power-of-ten
//! position of the most significant digit. Digit strings are normalized:
//! no trailing zero digits, a nonzero leading digit, every digit in `0..=9`.
//! Zero is the finite form with an empty digit string, and keeps its sign.
//!
//! The type carries a total order matching the index encoding: negative
//! infinity, then finite values numerically, then positive infinity, with
//! `-0` ordered just below `+0` (the signed zeros are distinct values here,
//! as in IEEE-754 total ordering).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An arbitrary-precision decimal number.
///
/// # Example
///
/// ```
/// use ordkey::Decimal;
///
/// let d: Decimal = "-12.5e3".parse().unwrap();
/// assert_eq!(d.to_string(), "-1.25e4");
/// assert!(d < "0".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decimal {
    /// Negative infinity; sorts below every finite decimal.
    NegInfinity,
    /// A finite value `±0.d1 d2 … dn × 10^(exponent+1)`.
    Finite {
        /// Sign; `true` for negative values, including `-0`.
        negative: bool,
        /// Power-of-ten position of the most significant digit.
        exponent: i64,
        /// Normalized significant digits, most significant first.
        digits: Vec<u8>,
    },
    /// Positive infinity; sorts above every finite decimal.
    Infinity,
}

/// Failure to parse a decimal literal.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid decimal literal {literal:?}")]
pub struct ParseDecimalError {
    literal: String,
}

impl Decimal {
    /// Zero with the given sign.
    #[must_use]
    pub const fn zero(negative: bool) -> Self {
        Self::Finite { negative, exponent: 0, digits: Vec::new() }
    }

    /// Builds a normalized finite decimal, stripping trailing zero digits
    /// and absorbing leading zero digits into the exponent.
    ///
    /// Returns `None` if a digit is out of range or the normalization would
    /// overflow the exponent.
    #[must_use]
    pub fn finite(negative: bool, exponent: i64, digits: &[u8]) -> Option<Self> {
        if digits.iter().any(|&d| d > 9) {
            return None;
        }
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        let digits = &digits[leading..];
        let Some(last) = digits.iter().rposition(|&d| d != 0) else {
            return Some(Self::zero(negative));
        };
        let exponent = exponent.checked_sub(leading as i64)?;
        Some(Self::Finite { negative, exponent, digits: digits[..=last].to_vec() })
    }

    /// Returns `true` for a zero of either sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite { digits, .. } if digits.is_empty())
    }

    /// Returns `true` for either infinity.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::NegInfinity | Self::Infinity)
    }

    /// Returns `true` for negative values, including `-0` and `-Infinity`.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        match self {
            Self::NegInfinity => true,
            Self::Finite { negative, .. } => *negative,
            Self::Infinity => false,
        }
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        use Decimal::{Finite, Infinity, NegInfinity};
        match (self, other) {
            (NegInfinity, NegInfinity) | (Infinity, Infinity) => Ordering::Equal,
            (NegInfinity, _) | (_, Infinity) => Ordering::Less,
            (_, NegInfinity) | (Infinity, _) => Ordering::Greater,
            (
                Finite { negative: an, exponent: ae, digits: ad },
                Finite { negative: bn, exponent: be, digits: bd },
            ) => {
                // Sign first: negative < zero-of-either-sign < positive,
                // with -0 < +0.
                if an != bn {
                    return if *an { Ordering::Less } else { Ordering::Greater };
                }
                let magnitude = match (ad.is_empty(), bd.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    // A normalized digit string that is a prefix of another
                    // is the smaller magnitude, so slice ordering is exact.
                    (false, false) => ae.cmp(be).then_with(|| ad.cmp(bd)),
                };
                if *an {
                    magnitude.reverse()
                } else {
                    magnitude
                }
            }
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError { literal: s.to_owned() };
        let mut rest = s.trim();
        let negative = if let Some(stripped) = rest.strip_prefix('-') {
            rest = stripped;
            true
        } else {
            if let Some(stripped) = rest.strip_prefix('+') {
                rest = stripped;
            }
            false
        };

        if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
            return Ok(if negative { Self::NegInfinity } else { Self::Infinity });
        }

        let (mantissa, exp_part) = match rest.find(['e', 'E']) {
            Some(idx) => {
                let exp: i64 = rest[idx + 1..].parse().map_err(|_| err())?;
                (&rest[..idx], exp)
            }
            None => (rest, 0),
        };

        let (int_part, frac_part) = match mantissa.find('.') {
            Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let digits: Vec<u8> =
            int_part.bytes().chain(frac_part.bytes()).map(|b| b - b'0').collect();
        // The most significant digit of `digits` sits at power-of-ten
        // position `int_part.len() - 1` before the e-suffix shifts it.
        let exponent = (int_part.len() as i64 - 1).checked_add(exp_part).ok_or_else(err)?;
        Self::finite(negative, exponent, &digits).ok_or_else(err)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInfinity => f.write_str("-Infinity"),
            Self::Infinity => f.write_str("Infinity"),
            Self::Finite { negative, exponent, digits } => {
                if *negative {
                    f.write_str("-")?;
                }
                if digits.is_empty() {
                    return f.write_str("0");
                }
                write!(f, "{}", digits[0])?;
                if digits.len() > 1 {
                    f.write_str(".")?;
                    for d in &digits[1..] {
                        write!(f, "{d}")?;
                    }
                }
                write!(f, "e{exponent}")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parse_normalizes() {
        assert_eq!(dec("123.45"), dec("1.2345e2"));
        assert_eq!(dec("0.00123"), dec("1.23e-3"));
        assert_eq!(dec("1000"), Decimal::finite(false, 3, &[1]).unwrap());
        assert_eq!(dec("00.50"), Decimal::finite(false, -1, &[5]).unwrap());
        assert_eq!(dec("0"), Decimal::zero(false));
        assert_eq!(dec("-0e312"), Decimal::zero(true));
        assert_eq!(dec("-Infinity"), Decimal::NegInfinity);
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "-", ".", "1.2.3", "1e", "abc", "1x5"] {
            assert!(s.parse::<Decimal>().is_err(), "{s:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        for s in ["1.2345e2", "-5e-10", "0", "-0", "Infinity", "-Infinity", "9.9e18"] {
            let d = dec(s);
            assert_eq!(dec(&d.to_string()), d, "{s}");
        }
    }

    #[test]
    fn ordering_is_numeric() {
        let ordered = [
            dec("-Infinity"),
            dec("-1e100"),
            dec("-2.5"),
            dec("-2"),
            dec("-1e-100"),
            dec("-0"),
            dec("0"),
            dec("1e-100"),
            dec("2"),
            dec("2.5"),
            dec("1e100"),
            dec("Infinity"),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn prefix_digits_are_smaller() {
        // 0.5 < 0.51 < 0.52, same exponent.
        assert!(dec("0.5") < dec("0.51"));
        assert!(dec("0.51") < dec("0.52"));
        assert!(dec("-0.51") < dec("-0.5"));
    }

    #[test]
    fn finite_rejects_bad_digits() {
        assert!(Decimal::finite(false, 0, &[1, 12]).is_none());
        assert_eq!(Decimal::finite(false, 0, &[0, 0]), Some(Decimal::zero(false)));
    }
}
