//! Exact root versus a floating-point reference.
//!
//! `f64` holds 53 significant bits, so `sqrt(value as f64)` drifts from the
//! true root for wide values. Pairing both roots shows where and how: the
//! float root may be too big, may wrap when squared, or may be good but
//! one short.

use super::check::RootCheck;
use crate::numerics::{BinaryInteger, NumericsError};

/// Native integers with a floating-point square root.
pub trait FloatRoot: BinaryInteger {
    /// `sqrt(self as f64)` truncated back to `Self`.
    ///
    /// The cast back saturates, and a negative input yields zero.
    fn float_root(self) -> Self;
}

macro_rules! impl_float_root {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FloatRoot for $ty {
                #[inline]
                fn float_root(self) -> Self {
                    (self as f64).sqrt() as $ty
                }
            }
        )*
    };
}

impl_float_root!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// The exact root of a value next to its floating-point root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootComparison<T> {
    float: RootCheck<T>,
    exact: RootCheck<T>,
}

impl<T: FloatRoot> RootComparison<T> {
    /// Computes both roots of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::OutOfRange`] for a negative `value`.
    pub fn of(value: T) -> Result<Self, NumericsError> {
        let exact = RootCheck::of(value)?;
        let float = RootCheck::with_root(value, value.float_root());

        Ok(Self { float, exact })
    }

    pub fn float(&self) -> &RootCheck<T> {
        &self.float
    }

    pub fn exact(&self) -> &RootCheck<T> {
        &self.exact
    }

    pub fn roots_agree(&self) -> bool {
        self.float.root() == self.exact.root()
    }

    /// The larger of the two roots that are good, i.e. not too big and not
    /// wrapped.
    pub fn best(&self) -> T {
        if self.float.is_good() && self.float.root() > self.exact.root() {
            self.float.root()
        } else {
            self.exact.root()
        }
    }
}

/// Disagreements found by [`compare_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Number of values compared.
    pub checked: u64,
    /// Values where the two roots differ.
    pub mismatches: u64,
    /// Mismatches where the float root is too big or wraps.
    pub bad_float_roots: u64,
    /// Mismatches where the float root is good but the exact one is not.
    pub bad_exact_roots: u64,
}

/// Compares both roots for every value of `values`.
///
/// A mismatch where both roots are good (the float root is short) counts
/// only towards `mismatches`.
///
/// # Errors
///
/// Stops at the first negative value with [`NumericsError::OutOfRange`].
pub fn compare_all<T, I>(values: I) -> Result<ComparisonReport, NumericsError>
where
    T: FloatRoot,
    I: IntoIterator<Item = T>,
{
    let mut report = ComparisonReport::default();

    for value in values {
        let comparison = RootComparison::of(value)?;
        report.checked += 1;

        if comparison.roots_agree() {
            continue;
        }

        report.mismatches += 1;

        if !comparison.float.is_good() {
            report.bad_float_roots += 1;
        } else if !comparison.exact.is_good() {
            report.bad_exact_roots += 1;
        }
    }

    Ok(report)
}
