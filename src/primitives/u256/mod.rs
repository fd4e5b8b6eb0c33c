//! 256-bit unsigned integer primitive
//!
//! `U256` is the crate's example of a binary integer wider than anything
//! the language provides natively. The root algorithm runs on it at full
//! width, with no wider scratch type available, which is what makes it a
//! useful worked case for the overflow handling.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
