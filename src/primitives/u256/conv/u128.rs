//! Conversions between `U256` and 128-bit halves
//!
//! These are what the tests and validation helpers use to widen native
//! `u128` values, so that `u128` products can be checked exactly.
//!
//! With the `speed` feature the byte (de)assembly is done with shifts
//! instead of slice copies.

use crate::primitives::U256;

#[cfg(feature = "speed")]
#[inline(always)]
fn unpack_half(bytes: &[u8]) -> u128 {
    bytes
        .iter()
        .take(16)
        .fold(0u128, |acc, &b| (acc << 8) | b as u128)
}

#[cfg(feature = "speed")]
#[inline(always)]
fn pack_half(value: u128, out: &mut [u8]) {
    for (i, o) in out.iter_mut().take(16).enumerate() {
        *o = (value >> (120 - 8 * i)) as u8;
    }
}

#[cfg(not(feature = "speed"))]
fn unpack_half(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&bytes[..16]);

    u128::from_be_bytes(buf)
}

#[cfg(not(feature = "speed"))]
fn pack_half(value: u128, out: &mut [u8]) {
    out[..16].copy_from_slice(&value.to_be_bytes());
}

/// Splits a `U256` into `[high, low]` 128-bit halves.
impl From<U256> for [u128; 2] {
    fn from(value: U256) -> Self {
        [unpack_half(&value.0[..16]), unpack_half(&value.0[16..])]
    }
}

/// Joins `[high, low]` 128-bit halves into a `U256`.
impl From<[u128; 2]> for U256 {
    fn from(value: [u128; 2]) -> Self {
        let mut out = [0u8; 32];

        pack_half(value[0], &mut out[..16]);
        pack_half(value[1], &mut out[16..]);

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u128`.
///
/// Fails if any of the upper 128 bits is set.
impl TryFrom<U256> for u128 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let [high, low]: [u128; 2] = value.into();

        if high != 0 {
            return Err(());
        }

        Ok(low)
    }
}

/// Places a `u128` in the least significant half of a `U256`.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256::from([0, value])
    }
}
