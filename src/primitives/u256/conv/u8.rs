//! Conversions between `U256` and byte representations

use crate::primitives::U256;

/// Converts a `U256` into its 32 big-endian bytes.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Interprets 32 bytes as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Attempts to convert a `U256` into a `u8`.
///
/// Fails if any of the upper 248 bits is set.
impl TryFrom<U256> for u8 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(31);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(low[0])
    }
}

impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 32];
        out[31] = value;
        U256(out)
    }
}
