//! Value generators feeding bulk validation and benchmarks.
//!
//! Exhaustive sweeps are impossible above 32 bits, so wide types are
//! validated on the values most likely to break an integer root: powers of
//! two and their neighbourhoods, and a descent from the maximum.

use crate::numerics::{BinaryInteger, NumericsError, bit_width};

use std::iter::successors;

/// Every positive power of two representable in `T`, ascending.
///
/// For signed types the sign bit is skipped.
///
/// # Errors
///
/// Returns [`NumericsError::Unsupported`] if the width of `T` cannot be
/// derived.
pub fn powers_of_two<T: BinaryInteger>() -> Result<impl Iterator<Item = T>, NumericsError> {
    let bits = bit_width::<T>()?;

    Ok((0..bits)
        .map(|bit| T::ONE.shl_bits(bit))
        .filter(|power| *power > T::ZERO))
}

/// Every positive `j` with `p - offset <= j < p + offset`, for each power
/// of two `p` of [`powers_of_two`].
///
/// Windows are clamped to `1..=T::MAX` instead of wrapping, and adjacent
/// windows overlap for small powers, so a value may be yielded more than
/// once. A non-positive `offset` yields nothing.
///
/// # Errors
///
/// Same as [`powers_of_two`].
pub fn around_powers_of_two<T: BinaryInteger>(
    offset: T,
) -> Result<impl Iterator<Item = T>, NumericsError> {
    Ok(powers_of_two::<T>()?
        .filter(move |_| offset > T::ZERO)
        .flat_map(move |power| {
            let low = if power > offset {
                power.wrapping_sub(offset)
            } else {
                T::ONE
            };

            let reach = offset.wrapping_sub(T::ONE);
            let high = if power > T::MAX.wrapping_sub(reach) {
                T::MAX
            } else {
                power.wrapping_add(reach)
            };

            inclusive(low, high)
        }))
}

/// `count` values starting at `start`, each `step` below the previous one.
///
/// The descent wraps if it passes below `T::MIN`.
pub fn descending<T: BinaryInteger>(start: T, count: usize, step: T) -> impl Iterator<Item = T> {
    successors(Some(start), move |&value| Some(value.wrapping_sub(step))).take(count)
}

fn inclusive<T: BinaryInteger>(low: T, high: T) -> impl Iterator<Item = T> {
    let first = (low <= high).then_some(low);

    successors(first, move |&value| {
        (value < high).then(|| value.wrapping_add(T::ONE))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_covers_both_ends() {
        let values: Vec<u8> = inclusive(250, 255).collect();
        assert_eq!(values, vec![250, 251, 252, 253, 254, 255]);

        assert_eq!(inclusive(3u8, 2).count(), 0);
        assert_eq!(inclusive(7u8, 7).collect::<Vec<_>>(), vec![7]);
    }
}
