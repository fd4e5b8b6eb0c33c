//! Errors reported by the numeric routines.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Errors that can occur while computing a root or a bit width.
///
/// Both are deterministic: repeating the call with the same input yields
/// the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericsError {
    /// The input is negative, which only a signed type can represent.
    OutOfRange,
    /// The bit width of the type cannot be derived from its bounds.
    Unsupported,
}

impl Display for NumericsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            NumericsError::OutOfRange => {
                f.write_str("cannot compute the square root of a negative number")
            }
            NumericsError::Unsupported => {
                f.write_str("bit width cannot be derived for this integer type")
            }
        }
    }
}

impl Error for NumericsError {}
