//! The closed universe of values the codec understands.
//!
//! # Example
//!
//! ```
//! use ordkey::Value;
//!
//! let name: Value = "Alice".into();
//! let age: Value = 30i64.into();
//! let weight: Value = 72.5f64.into();
//!
//! assert_eq!(name.as_str(), Some("Alice"));
//! assert_eq!(age.as_int(), Some(30));
//! assert_eq!(weight.as_float(), Some(72.5));
//! ```

use serde::{Deserialize, Serialize};

use super::decimal::Decimal;

/// A value that can be encoded.
///
/// Composite variants exclusively own their children; values form trees,
/// never graphs. `Set` and `Map` keep their elements in insertion order —
/// the codec writes and restores exactly that order, so all composites
/// round-trip identically.
///
/// | Variant | Payload | Notes |
/// |---------|---------|-------|
/// | `Null` | - | sorts before everything |
/// | `Bool` | `bool` | false before true |
/// | `Int` | `i128` | encodable range `i64::MIN ..= u64::MAX` |
/// | `Float` | `f64` | NaN is rejected by the codec |
/// | `Decimal` | [`Decimal`] | arbitrary precision |
/// | `String` | `String` | UTF-8 text |
/// | `Bytes` | `Vec<u8>` | raw bytes; sort before text |
/// | `List` / `Tuple` | `Vec<Value>` | ordered sequences |
/// | `Set` | `Vec<Value>` | unordered collection, insertion order kept |
/// | `Map` | `Vec<(Value, Value)>` | key/value pairs, insertion order kept |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer; the codec accepts `i64::MIN ..= u64::MAX`.
    Int(i128),
    /// 64-bit floating point number.
    Float(f64),
    /// Arbitrary-precision decimal.
    Decimal(Decimal),
    /// UTF-8 string.
    String(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// List-like sequence.
    List(Vec<Value>),
    /// Fixed-arity (tuple-like) sequence.
    Tuple(Vec<Value>),
    /// Set of values.
    Set(Vec<Value>),
    /// Mapping of key/value pairs.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the composite kinds, which the index encoding
    /// rejects.
    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Tuple(_) | Self::Set(_) | Self::Map(_))
    }

    /// Returns the value as a boolean if it is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is one.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float if it is one.
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a decimal if it is one.
    #[inline]
    #[must_use]
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is one.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a byte slice if it is one.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// A short name for the value's kind, used in error context.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i128::from(i))
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(i: u64) -> Self {
        Self::Int(i128::from(i))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Decimal> for Value {
    #[inline]
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    #[inline]
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}
