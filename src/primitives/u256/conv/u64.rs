//! Conversions between `U256` and 64-bit limbs
//!
//! Limb arrays are ordered from most significant to least significant
//! word, mirroring the big-endian byte layout.

use crate::primitives::U256;

/// Splits a `U256` into four big-endian 64-bit words.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_be_bytes(word);
        }

        out
    }
}

/// Joins four big-endian 64-bit words into a `U256`.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// Fails if any of the upper 192 bits is set.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let [w0, w1, w2, low]: [u64; 4] = value.into();

        if w0 | w1 | w2 != 0 {
            return Err(());
        }

        Ok(low)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from([0, 0, 0, value])
    }
}
