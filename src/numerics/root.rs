//! Nearest integer root
//!
//! Computes `floor(sqrt(value))` with integer-only binary search at the
//! width of the input type. No floating point and no wider scratch type
//! are involved, so the same code is exact for `u8` and for `U256`.
//!
//! Two overflow hazards are handled in place:
//! - the midpoint is `left + ((right - left) >> 1)`, never `left + right`
//! - a wrapped `mid * mid` is recognised by comparing it against `mid`

use super::binary::{BinaryInteger, UnsignedInteger};
use super::error::NumericsError;

/// Returns the largest `r` such that `r * r <= value`.
///
/// # Errors
///
/// Returns [`NumericsError::OutOfRange`] if `value` is negative. This can
/// only happen for signed types.
///
/// # Example
///
/// ```rust
/// use introot::numerics::nearest_integer_root;
///
/// assert_eq!(nearest_integer_root(99u32), Ok(9));
/// assert_eq!(nearest_integer_root(u128::MAX), Ok(u64::MAX as u128));
/// assert!(nearest_integer_root(-1i64).is_err());
/// ```
pub fn nearest_integer_root<T: BinaryInteger>(value: T) -> Result<T, NumericsError> {
    if value < T::ZERO {
        return Err(NumericsError::OutOfRange);
    }

    Ok(root_of_non_negative(value))
}

/// Infallible root for types that cannot hold negative values.
pub trait IntegerRoot: UnsignedInteger {
    /// See [`nearest_integer_root`].
    fn integer_root(self) -> Self {
        root_of_non_negative(self)
    }
}

impl<T: UnsignedInteger> IntegerRoot for T {}

fn root_of_non_negative<T: BinaryInteger>(value: T) -> T {
    if value <= T::ONE {
        return value;
    }

    let (mut left, mut right) = initial_range(value);
    let mut best = T::ONE;

    while left <= right {
        let mid = left.wrapping_add(right.wrapping_sub(left).shr_bits(1));
        let squared = mid.wrapping_mul(mid);

        if squared == value {
            return mid;
        }

        // For mid >= 2 a true square exceeds mid, so `squared <= mid` means
        // the product wrapped. With mid == 1 both branches keep best at 1.
        if squared > value || squared <= mid {
            right = mid.wrapping_sub(T::ONE);
        } else {
            left = mid.wrapping_add(T::ONE);
            best = mid;
        }
    }

    best
}

/// Power-of-two band `[left, right]` that contains the root of `value`.
///
/// A value of `bits` significant bits has a root of `ceil(bits / 2)` bits,
/// so the root lies in `[2^(ceil(bits/2) - 1), 2^ceil(bits/2) - 1]`.
/// `value` must be at least 2.
fn initial_range<T: BinaryInteger>(value: T) -> (T, T) {
    let bits = 1 + value.checked_ilog2().unwrap_or(1);
    let half_bits = bits >> 1;
    let odd_offset = bits & 1;

    let left = T::ONE.shl_bits(half_bits - 1 + odd_offset);
    let right = T::ONE.shl_bits(half_bits + odd_offset).wrapping_sub(T::ONE);

    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_range_brackets_small_values() {
        assert_eq!(initial_range(2u8), (1, 1));
        assert_eq!(initial_range(3u8), (1, 1));
        assert_eq!(initial_range(4u8), (2, 3));
        assert_eq!(initial_range(15u8), (2, 3));
        assert_eq!(initial_range(16u8), (4, 7));
        assert_eq!(initial_range(255u8), (8, 15));
    }

    #[test]
    fn initial_range_at_full_width() {
        assert_eq!(initial_range(u128::MAX), (1u128 << 63, u64::MAX as u128));
        assert_eq!(initial_range(i128::MAX), (1i128 << 63, (1i128 << 64) - 1));
    }

    #[test]
    fn initial_range_contains_root_for_every_u16() {
        for value in 2..=u16::MAX {
            let (left, right) = initial_range(value);
            let root = root_of_non_negative(value);
            assert!(left <= root && root <= right, "{value}: {root} not in [{left}, {right}]");
        }
    }

    #[test]
    fn signed_wraparound_is_detected() {
        // 15 * 15 wraps to -31 in i8.
        assert_eq!(15i8.wrapping_mul(15), -31);
        assert_eq!(root_of_non_negative(i8::MAX), 11);
        assert_eq!(root_of_non_negative(120i8), 10);
    }
}
