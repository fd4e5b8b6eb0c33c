//! Parallel exhaustive sweep.
//!
//! The range is cut into one contiguous partition per worker. Each worker
//! counts locally and publishes its totals once, through atomic adds, so the
//! order in which workers finish does not matter.

use super::check::RootCheck;
use crate::numerics::BinaryInteger;

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// Aggregate outcome of a [`sweep`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of values visited.
    pub checked: u64,
    /// Values whose root failed [`RootCheck::is_exact`].
    pub mismatches: u64,
    /// Negative values, rejected with `OutOfRange`.
    pub rejected: u64,
}

impl SweepReport {
    fn absorb(&self, totals: &Totals) {
        totals.checked.fetch_add(self.checked, Ordering::Relaxed);
        totals.mismatches.fetch_add(self.mismatches, Ordering::Relaxed);
        totals.rejected.fetch_add(self.rejected, Ordering::Relaxed);
    }
}

#[derive(Default)]
struct Totals {
    checked: AtomicU64,
    mismatches: AtomicU64,
    rejected: AtomicU64,
}

/// Checks the root of every value in `range` on `workers` threads.
///
/// `workers` is clamped to at least one and at most one per value.
/// Partitions are offsets from the start of the range, so any range of a
/// type that converts into `i128` is accepted, up to `i128::MAX` itself.
pub fn sweep<T>(range: RangeInclusive<T>, workers: usize) -> SweepReport
where
    T: BinaryInteger + Into<i128> + TryFrom<i128>,
{
    let start: i128 = (*range.start()).into();
    let end: i128 = (*range.end()).into();

    if start > end {
        return SweepReport::default();
    }

    // Offset of `end` from `start`; the value count may exceed u128.
    let span = end.abs_diff(start);
    let count = span.saturating_add(1);
    let workers = (workers.max(1) as u128).min(count);
    let chunk = count.div_ceil(workers);
    let totals = Totals::default();

    thread::scope(|scope| {
        for worker in 0..workers {
            let Some(first) = worker.checked_mul(chunk).filter(|&first| first <= span) else {
                break;
            };
            let last = first.saturating_add(chunk - 1).min(span);

            // Both offsets are at most `span`, so the values lie in `start..=end`.
            let low = start.wrapping_add_unsigned(first);
            let high = start.wrapping_add_unsigned(last);
            let totals = &totals;

            scope.spawn(move || check_partition::<T>(low, high).absorb(totals));
        }
    });

    SweepReport {
        checked: totals.checked.into_inner(),
        mismatches: totals.mismatches.into_inner(),
        rejected: totals.rejected.into_inner(),
    }
}

fn check_partition<T>(low: i128, high: i128) -> SweepReport
where
    T: BinaryInteger + Into<i128> + TryFrom<i128>,
{
    let mut report = SweepReport::default();

    for value in (low..=high).filter_map(|v| T::try_from(v).ok()) {
        report.checked += 1;

        match RootCheck::of(value) {
            Ok(check) if !check.is_exact() => report.mismatches += 1,
            Ok(_) => {}
            Err(_) => report.rejected += 1,
        }
    }

    report
}
