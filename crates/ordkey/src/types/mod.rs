//! Core data types: [`Value`] and [`Decimal`].

mod decimal;
mod value;

pub use decimal::{Decimal, ParseDecimalError};
pub use value::Value;
