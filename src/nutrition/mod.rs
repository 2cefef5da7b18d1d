//! Quantity handling
//!
//! Weight unit conversion and parsing of user-entered portions.

pub mod converter;
pub mod units;

pub use converter::{parse_quantity, to_grams};
pub use units::grams_per_unit;
