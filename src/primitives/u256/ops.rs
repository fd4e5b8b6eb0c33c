//! Arithmetic and shift operations for `U256`
//!
//! This module implements the operator traits a generic fixed-width
//! integer algorithm relies on. Every arithmetic operation **wraps**
//! modulo 2²⁵⁶: carries and borrows out of the most significant byte are
//! discarded, exactly like `u128::wrapping_add` and friends.
//!
//! Shifts take a plain bit count rather than another `U256`. Shifting by
//! 256 or more yields zero.
//!
//! The internal representation is big-endian.

use crate::primitives::u256::U256;

use std::ops::{Add, Mul, Shl, Shr, Sub};

/// Logical left shift (`<<`) by a bit count.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= U256::BITS {
            return U256::ZERO;
        }

        let byte_shift = (shift / 8) as usize;
        let bit_shift = shift % 8;

        let mut tmp = [0u8; 32];
        tmp[..(32 - byte_shift)].copy_from_slice(&self.0[byte_shift..]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        // Bits leave a byte towards the next more significant one (lower index).
        for i in (0..32).rev() {
            let val = tmp[i];

            out[i] = (val << bit_shift) | carry;
            carry = val >> (8 - bit_shift);
        }

        U256(out)
    }
}

/// Logical right shift (`>>`) by a bit count.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= U256::BITS {
            return U256::ZERO;
        }

        let byte_shift = (shift / 8) as usize;
        let bit_shift = shift % 8;

        let mut tmp = [0u8; 32];
        tmp[byte_shift..].copy_from_slice(&self.0[..(32 - byte_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in 0..32 {
            let val = tmp[i];

            out[i] = (val >> bit_shift) | carry;
            carry = val << (8 - bit_shift);
        }

        U256(out)
    }
}

/// Wrapping addition.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        U256(out)
    }
}

/// Wrapping subtraction.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];
        let mut borrow = false;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let (diff, under_a) = a.overflowing_sub(b);
            let (diff, under_b) = diff.overflowing_sub(borrow as u8);

            *o = diff;
            borrow = under_a || under_b;
        }

        U256(out)
    }
}

/// Wrapping multiplication.
///
/// Schoolbook product over 64-bit limbs, keeping only the low four limbs.
/// Each partial `cell` is bounded by `(2⁶⁴ − 1)² + 2·(2⁶⁴ − 1) = 2¹²⁸ − 1`
/// so the `u128` accumulator never overflows.
impl Mul<U256> for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        let mut lhs: [u64; 4] = self.into();
        let mut rhs: [u64; 4] = rhs.into();
        lhs.reverse();
        rhs.reverse();

        let mut out = [0u64; 4];

        for (i, &a) in lhs.iter().enumerate() {
            let mut carry = 0u128;

            for (j, &b) in rhs.iter().take(4 - i).enumerate() {
                let cell = out[i + j] as u128 + a as u128 * b as u128 + carry;
                out[i + j] = cell as u64;
                carry = cell >> 64;
            }
        }

        out.reverse();

        U256::from(out)
    }
}
