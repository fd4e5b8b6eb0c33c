//! Bit width of a binary integer type.

use super::binary::BinaryInteger;
use super::error::NumericsError;

/// Returns the number of bits used to represent `T`.
///
/// Native integers answer from their `KNOWN_BITS` constant. Any other type
/// is measured as `1 + floor(log2(T::MAX))`, plus one sign bit when
/// `T::MIN` is negative.
///
/// # Errors
///
/// Returns [`NumericsError::Unsupported`] if `T::MAX` is not positive, in
/// which case no logarithm exists.
pub fn bit_width<T: BinaryInteger>() -> Result<u32, NumericsError> {
    if let Some(bits) = T::KNOWN_BITS {
        return Ok(bits);
    }

    let magnitude = T::MAX.checked_ilog2().ok_or(NumericsError::Unsupported)? + 1;
    let sign = (T::MIN < T::ZERO) as u32;

    Ok(magnitude + sign)
}
