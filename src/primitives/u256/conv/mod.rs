//! Integer conversion utilities
//!
//! Explicit conversions between `U256` and native integer types, split by
//! integer width:
//! - `u8`: raw big-endian bytes and single bytes
//! - `u64`: the four limbs used by multiplication
//! - `u128`: the two halves used when widening native 128-bit values
//!
//! Narrowing conversions are fallible and fail when any discarded bit is
//! set; widening conversions place the value in the least significant bits.

mod u128;
mod u64;
mod u8;
