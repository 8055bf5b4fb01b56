//! Property-based tests for both encodings.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::cmp::Ordering;

use proptest::prelude::*;

use crate::encoding::{decode, decode_value, encode, encode_index, Adjust};
use crate::types::{Decimal, Value};

/// Strategy for decimals, covering both special forms and normalized
/// finite values (digits drawn from 1-9 are normalized by construction).
fn arb_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::NegInfinity),
        Just(Decimal::Infinity),
        any::<bool>().prop_map(Decimal::zero),
        (any::<bool>(), -1_000_000i64..1_000_000, prop::collection::vec(1u8..=9, 1..12)).prop_map(
            |(negative, exponent, digits)| Decimal::Finite { negative, exponent, digits }
        ),
        (any::<bool>(), any::<i64>(), prop::collection::vec(1u8..=9, 1..4))
            .prop_map(|(negative, exponent, digits)| Decimal::Finite {
                negative,
                exponent,
                digits
            }),
    ]
}

/// Strategy for scalar values (the kinds the index encoding accepts).
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Int(i128::from(i))),
        any::<u64>().prop_map(|i| Value::Int(i128::from(i))),
        any::<f64>().prop_filter("not NaN", |f| !f.is_nan()).prop_map(Value::Float),
        arb_decimal().prop_map(Value::Decimal),
        ".*".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..100).prop_map(Value::Bytes),
    ]
}

/// Strategy for arbitrary values including nested composites.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 48, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Tuple),
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Set),
            prop::collection::vec((inner.clone(), inner), 0..8).prop_map(Value::Map),
        ]
    })
}

/// The natural total order the index encoding must reproduce: kinds rank
/// by type tag, strings compare with trailing NULs stripped (the encoding
/// treats them as insignificant), floats use IEEE total ordering.
fn natural_cmp(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::Bytes(_) => 4,
            Value::String(_) => 5,
            Value::Decimal(_) => 6,
            _ => unreachable!("composites are not index-encodable"),
        }
    }
    fn strip(bytes: &[u8]) -> &[u8] {
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        &bytes[..end]
    }
    rank(a).cmp(&rank(b)).then_with(|| match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Bytes(x), Value::Bytes(y)) => strip(x).cmp(strip(y)),
        (Value::String(x), Value::String(y)) => strip(x.as_bytes()).cmp(strip(y.as_bytes())),
        (Value::Decimal(x), Value::Decimal(y)) => x.cmp(y),
        _ => Ordering::Equal,
    })
}

proptest! {
    #[test]
    fn value_roundtrip(value in arb_value()) {
        let encoded = encode(&value).expect("encoding should succeed");
        let decoded = decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(value, decoded);
    }

    #[test]
    fn decimal_roundtrip(decimal in arb_decimal()) {
        let value = Value::Decimal(decimal);
        let encoded = encode(&value).expect("encoding should succeed");
        prop_assert_eq!(decode(&encoded).expect("decoding should succeed"), value);
    }

    #[test]
    fn decode_reports_exact_consumed_length(value in arb_value()) {
        let encoded = encode(&value).expect("encoding should succeed");
        let (decoded, consumed) = decode_value(&encoded).expect("decoding should succeed");
        prop_assert_eq!(value, decoded);
        prop_assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn index_order_matches_value_order(a in arb_scalar(), b in arb_scalar()) {
        let ka = encode_index(std::slice::from_ref(&a), Adjust::None).expect("index encoding");
        let kb = encode_index(std::slice::from_ref(&b), Adjust::None).expect("index encoding");
        prop_assert_eq!(ka.cmp(&kb), natural_cmp(&a, &b), "{:?} vs {:?}", a, b);
    }

    #[test]
    fn index_order_matches_tuple_order(
        a in prop::collection::vec(arb_scalar(), 1..4),
        b in prop::collection::vec(arb_scalar(), 1..4),
    ) {
        let ka = encode_index(&a, Adjust::None).expect("index encoding");
        let kb = encode_index(&b, Adjust::None).expect("index encoding");
        let natural = a.iter()
            .zip(&b)
            .map(|(x, y)| natural_cmp(x, y))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len()));
        prop_assert_eq!(ka.cmp(&kb), natural, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn adjustment_brackets_every_key(values in prop::collection::vec(arb_scalar(), 1..4)) {
        let base = encode_index(&values, Adjust::None).expect("index encoding");
        let above = encode_index(&values, Adjust::Successor).expect("index encoding");
        let below = encode_index(&values, Adjust::Predecessor).expect("index encoding");
        prop_assert!(below < base);
        prop_assert!(base < above);
    }

    /// Arbitrary bytes must decode to an error or a value, never panic.
    #[test]
    fn arbitrary_bytes_dont_crash(bytes in prop::collection::vec(any::<u8>(), 0..500)) {
        let _ = decode(&bytes);
    }

    /// Every truncation of a valid encoding must fail cleanly or decode a
    /// valid prefix, never panic.
    #[test]
    fn truncated_encodings_dont_crash(value in arb_value()) {
        let encoded = encode(&value).expect("encoding should succeed");
        for cut in 1..encoded.len() {
            let _ = decode(&encoded[..cut]);
        }
    }

    /// Single-byte mutations must fail cleanly or decode, never panic.
    #[test]
    fn mutated_encodings_dont_crash(
        value in arb_value(),
        idx in any::<usize>(),
        byte in any::<u8>(),
    ) {
        let mut encoded = encode(&value).expect("encoding should succeed");
        if !encoded.is_empty() {
            let idx = idx % encoded.len();
            encoded[idx] = byte;
            let _ = decode(&encoded);
        }
    }
}
