//! Integer numerics
//!
//! Generic routines over fixed-width binary integers:
//!
//! - `root`  
//!   The nearest integer root, `floor(sqrt(value))`, computed exactly with
//!   integer-only binary search at the width of the input type. It is safe
//!   at the very top of the range (`u128::MAX`, `U256::MAX`), where a
//!   floating-point square root is already wrong.
//!
//! - `width`  
//!   The number of bits of a type, answered from a constant for native
//!   integers and derived from the type's bounds otherwise.
//!
//! - `halves`  
//!   Upper/lower 64-bit decomposition of 128-bit integers.
//!
//! Every routine is pure and can be called from any number of threads.

mod binary;
mod error;
mod halves;
mod root;
mod width;

pub use binary::{BinaryInteger, UnsignedInteger};
pub use error::NumericsError;
pub use halves::{upper_lower_i128, upper_lower_u128};
pub use root::{IntegerRoot, nearest_integer_root};
pub use width::bit_width;
