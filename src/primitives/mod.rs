//! Primitive types
//!
//! Fixed-size binary integers wider than the native ones. They are simple,
//! dependency-free value types with wrapping arithmetic, and they implement
//! the same [`BinaryInteger`](crate::numerics::BinaryInteger) capability
//! set as `u8..u128`, so every generic algorithm in the crate runs on them
//! unchanged.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer

mod u256;

pub use u256::U256;
