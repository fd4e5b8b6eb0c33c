//! The `(value, root, root²)` record used to judge a computed root.

use crate::numerics::{BinaryInteger, NumericsError, nearest_integer_root};

use std::fmt::{Display, Formatter, Result};

/// A value, a candidate root and the candidate squared in the type's own
/// wrapping arithmetic.
///
/// The root is either computed by [`RootCheck::of`] or supplied by the
/// caller through [`RootCheck::with_root`], e.g. from a floating-point
/// reference, so that both can be judged the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootCheck<T> {
    value: T,
    root: T,
    squared: T,
}

impl<T: BinaryInteger> RootCheck<T> {
    /// Computes the nearest integer root of `value` and records it.
    pub fn of(value: T) -> std::result::Result<Self, NumericsError> {
        let root = nearest_integer_root(value)?;

        Ok(Self::with_root(value, root))
    }

    /// Records a root obtained elsewhere.
    pub fn with_root(value: T, root: T) -> Self {
        Self {
            value,
            root,
            squared: root.wrapping_mul(root),
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn root(&self) -> T {
        self.root
    }

    pub fn squared(&self) -> T {
        self.squared
    }

    /// The square is larger than the value.
    pub fn is_too_big(&self) -> bool {
        self.value > T::ONE && self.squared > self.value
    }

    /// The square wrapped past the type's maximum.
    ///
    /// Only a root of at least 2 can tell: `1 * 1 <= 1` is not a wrap.
    pub fn is_wrapped_around(&self) -> bool {
        self.value > T::ONE && self.root > T::ONE && self.squared <= self.root
    }

    /// Neither too big nor wrapped.
    ///
    /// This does not prove the root is the largest one; see
    /// [`RootCheck::is_exact`].
    pub fn is_good(&self) -> bool {
        !self.is_too_big() && !self.is_wrapped_around()
    }
}

impl<T: BinaryInteger + Into<i128>> RootCheck<T> {
    /// `root² <= value < (root + 1)²`, evaluated in `i128`.
    pub fn is_exact(&self) -> bool {
        let value: i128 = self.value.into();
        let root: i128 = self.root.into();

        if root < 0 {
            return false;
        }

        // The next square may not fit; then nothing representable reaches it.
        let next = root.checked_add(1).and_then(|next| next.checked_mul(next));

        match root.checked_mul(root) {
            Some(square) => square <= value && next.is_none_or(|next| value < next),
            None => false,
        }
    }
}

impl<T: Display> Display for RootCheck<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {} ({})", self.value, self.root, self.squared)
    }
}
