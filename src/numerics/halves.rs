//! Upper and lower 64-bit halves of 128-bit integers.

/// Splits a `u128` into `(upper, lower)` 64-bit halves.
pub fn upper_lower_u128(value: u128) -> (u64, u64) {
    ((value >> 64) as u64, value as u64)
}

/// Splits an `i128` into `(upper, lower)` halves of its two's complement
/// bit pattern.
pub fn upper_lower_i128(value: i128) -> (u64, u64) {
    upper_lower_u128(value as u128)
}
