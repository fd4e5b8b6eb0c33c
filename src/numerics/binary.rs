//! Binary integer capability set
//!
//! [`BinaryInteger`] is the minimal interface the root and width routines
//! are generic over: ordering, the four bound constants, wrapping
//! arithmetic, logical shifts by a bit count and `floor(log2(x))`.
//!
//! Native integers get their implementation from a table macro. Wide
//! primitives such as [`U256`] implement it by hand on top of their
//! operator impls.

use crate::primitives::U256;

use std::fmt::Debug;

/// A fixed-width binary integer whose arithmetic wraps on overflow.
pub trait BinaryInteger: Copy + Ord + Debug {
    /// The value zero.
    const ZERO: Self;
    /// The value one.
    const ONE: Self;
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;

    /// Width in bits when it is known at compile time.
    ///
    /// Types that leave this as `None` have their width derived from
    /// `MIN` and `MAX` by [`bit_width`](crate::numerics::bit_width).
    const KNOWN_BITS: Option<u32> = None;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Left shift by `bits`, which must be smaller than the width.
    fn shl_bits(self, bits: u32) -> Self;

    /// Right shift by `bits`, which must be smaller than the width.
    fn shr_bits(self, bits: u32) -> Self;

    /// `floor(log2(self))`, or `None` when `self <= 0`.
    fn checked_ilog2(self) -> Option<u32>;
}

/// Marker for binary integers without negative values.
pub trait UnsignedInteger: BinaryInteger {}

macro_rules! impl_binary_integer {
    ($($ty:ty => $bits:expr),* $(,)?) => {
        $(
            impl BinaryInteger for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const KNOWN_BITS: Option<u32> = Some($bits);

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn shl_bits(self, bits: u32) -> Self {
                    self << bits
                }

                #[inline]
                fn shr_bits(self, bits: u32) -> Self {
                    self >> bits
                }

                #[inline]
                fn checked_ilog2(self) -> Option<u32> {
                    <$ty>::checked_ilog2(self)
                }
            }
        )*
    };
}

impl_binary_integer! {
    u8 => 8,
    u16 => 16,
    u32 => 32,
    u64 => 64,
    u128 => 128,
    usize => usize::BITS,
    i8 => 8,
    i16 => 16,
    i32 => 32,
    i64 => 64,
    i128 => 128,
    isize => isize::BITS,
}

impl UnsignedInteger for u8 {}
impl UnsignedInteger for u16 {}
impl UnsignedInteger for u32 {}
impl UnsignedInteger for u64 {}
impl UnsignedInteger for u128 {}
impl UnsignedInteger for usize {}
impl UnsignedInteger for U256 {}

// Width is left to the `MAX`-based fallback.
impl BinaryInteger for U256 {
    const ZERO: Self = U256::ZERO;
    const ONE: Self = U256::ONE;
    const MIN: Self = U256::ZERO;
    const MAX: Self = U256::MAX;

    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn shl_bits(self, bits: u32) -> Self {
        self << bits
    }

    fn shr_bits(self, bits: u32) -> Self {
        self >> bits
    }

    fn checked_ilog2(self) -> Option<u32> {
        U256::checked_ilog2(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u256_wrapping_arithmetic_matches_native_on_low_half() {
        let a = u128::MAX - 7;
        let b = 3u128;

        let wide = U256::from(a).wrapping_add(U256::from(b));
        assert_eq!(u128::try_from(wide), Ok(a + b));

        let wrapped = U256::ZERO.wrapping_sub(U256::ONE);
        assert_eq!(wrapped, U256::MAX);

        let square = U256::from(u128::MAX).wrapping_mul(U256::from(u128::MAX));
        let [high, low]: [u128; 2] = square.into();
        assert_eq!(high, u128::MAX - 1);
        assert_eq!(low, 1);
    }

    #[test]
    fn u256_shifts_cross_byte_boundaries() {
        let v = U256::from(0x80u8).shl_bits(1);
        assert_eq!(u128::try_from(v), Ok(0x100));

        let v = U256::from(0x100u64).shr_bits(1);
        assert_eq!(u128::try_from(v), Ok(0x80));

        let top = U256::ONE.shl_bits(255);
        assert_eq!(top.checked_ilog2(), Some(255));
        assert_eq!(top.shr_bits(255), U256::ONE);
    }

    #[test]
    fn u256_multiplication_wraps() {
        let half = U256::ONE.shl_bits(128);
        assert_eq!(half.wrapping_mul(half), U256::ZERO);
        assert_eq!(U256::MAX.wrapping_mul(U256::MAX), U256::ONE);
    }

    #[test]
    fn native_ilog2_of_non_positive_is_none() {
        assert_eq!(BinaryInteger::checked_ilog2(0u32), None);
        assert_eq!(BinaryInteger::checked_ilog2(-5i32), None);
        assert_eq!(BinaryInteger::checked_ilog2(1024u32), Some(10));
    }
}
