//! Validation helpers
//!
//! Building blocks for checking the root algorithm in bulk:
//!
//! - `check`  
//!   [`RootCheck`], the `(value, root, root²)` record with its verdicts.
//!
//! - `values`  
//!   Generators for the inputs worth checking when a type is too wide to
//!   sweep: powers of two, windows around them, and strided descents.
//!
//! - `compare`  
//!   [`RootComparison`], the exact root paired with a floating-point
//!   reference, and a report that sorts disagreements into bad float roots
//!   and bad exact roots.
//!
//! - `sweep`  
//!   An exhaustive, multi-threaded sweep over a range of any type that
//!   converts into `i128`, reporting aggregate mismatch counts.

mod check;
mod compare;
mod sweep;
mod values;

pub use check::RootCheck;
pub use compare::{ComparisonReport, FloatRoot, RootComparison, compare_all};
pub use sweep::{SweepReport, sweep};
pub use values::{around_powers_of_two, descending, powers_of_two};
