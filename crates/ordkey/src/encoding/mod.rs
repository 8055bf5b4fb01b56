//! The two byte encodings and their shared machinery.
//!
//! - [`value`] implements the standard (self-describing, loss-free)
//!   encoding for every value kind.
//! - [`sortable`] implements the index encoding for scalars, whose bytes
//!   compare in value order.
//! - [`keys`] assembles index encodings into range-scannable keys and
//!   provides the successor/predecessor fence adjustment.
//!
//! The lower layers — `width` (minimal payload widths), `head` (head byte
//! packing) and `scalar` (payload construction) — are shared so the two
//! encodings can never disagree about a scalar's bytes.

mod head;
pub mod keys;
mod scalar;
pub mod sortable;
pub mod traits;
pub mod value;
mod width;

#[cfg(test)]
mod proptest_tests;

pub use keys::{encode_index, encode_index_with_config, predecessor, successor, Adjust};
pub use traits::{Decoder, Encoder, FORMAT_VERSION};
pub use value::{decode, decode_value, encode, encode_with_config};

/// Maximum nesting depth accepted by encode and decode.
///
/// Recursion depth equals input nesting depth; the cap turns pathological
/// inputs into [`crate::Error::DepthExceeded`] instead of stack exhaustion.
pub const MAX_DEPTH: usize = 128;
