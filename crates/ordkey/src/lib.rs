//! `ordkey`
//!
//! An order-preserving binary codec for a small, closed universe of typed
//! values, with two encodings:
//!
//! - The **standard encoding** ([`encode`]/[`decode`]) is self-describing
//!   and loss-free, for storage and transmission.
//! - The **index encoding** ([`encode_index`]) covers scalars only and
//!   guarantees that comparing encoded bytes with `memcmp` reproduces the
//!   natural ordering of the values — the output is directly usable as a
//!   key in an ordered key-value store, and the successor/predecessor
//!   adjustment derives tight half-open range-scan bounds from it.
//!
//! # Example
//!
//! ```
//! use ordkey::{decode, encode, encode_index, Adjust, Value};
//!
//! // Standard encoding round-trips every supported value.
//! let value = Value::Map(vec![(Value::from("answer"), Value::Int(42))]);
//! assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
//!
//! // Index encodings sort like the values they encode.
//! let a = encode_index(&[Value::Int(-5)], Adjust::None).unwrap();
//! let b = encode_index(&[Value::Int(100)], Adjust::None).unwrap();
//! let c = encode_index(&[Value::Int(100_000)], Adjust::None).unwrap();
//! assert!(a < b && b < c);
//! ```
//!
//! # Concurrency
//!
//! Every encode or decode call owns its buffers and touches no shared
//! state, so the codec can be used freely from multiple threads.
//!
//! # Modules
//!
//! - [`types`] — the [`Value`] model and [`Decimal`] numbers
//! - [`encoding`] — both encodings, key building, head-byte machinery
//! - [`buffer`] — the growable [`Writer`](buffer::Writer) and cursor
//!   [`Reader`](buffer::Reader)
//! - [`error`] — the [`Error`] enum

#![deny(clippy::unwrap_used)]

pub mod buffer;
pub mod encoding;
pub mod error;
pub mod types;

pub use buffer::BufferConfig;
pub use encoding::{
    decode, decode_value, encode, encode_index, encode_index_with_config, encode_with_config,
    predecessor, successor, Adjust, Decoder, Encoder, FORMAT_VERSION, MAX_DEPTH,
};
pub use error::{Error, Result};
pub use types::{Decimal, ParseDecimalError, Value};
