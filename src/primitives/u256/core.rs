//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used as the widest binary integer the root algorithm runs on.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. It provides exactly what a generic
//! fixed-width algorithm needs:
//! - ordering and equality
//! - wrapping addition, subtraction and multiplication
//! - logical shifts by a bit count
//! - the position of the most significant set bit
//!
//! The internal representation is big-endian, which keeps the derived
//! ordering numerically correct and makes hexadecimal output direct.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
///
/// Arithmetic wraps modulo 2²⁵⁶, like the `wrapping_*` methods of the
/// native integer types.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Number of bits in the representation.
    pub const BITS: u32 = 256;

    const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// This method scans the integer from the most significant byte and
    /// returns the number of zero bits before the first one bit is encountered.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Returns `floor(log2(self))`, or `None` for zero.
    pub fn checked_ilog2(&self) -> Option<u32> {
        match self.leading_zeros() {
            256 => None,
            zeros => Some(255 - zeros),
        }
    }
}

impl Display for U256 {
    /// Formats the value as `0x`-prefixed lowercase hexadecimal without
    /// leading zeros, e.g. `0x1fa4`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("0x")?;

        let mut bytes = self.0.iter().skip_while(|&&byte| byte == 0);

        match bytes.next() {
            None => f.write_str("0"),
            Some(first) => {
                write!(f, "{:x}", first)?;

                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }

                Ok(())
            }
        }
    }
}
