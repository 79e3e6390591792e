//! In-place most-significant-digit radix sort over decimal digits.
//!
//! The building block is [`sort_range`]: an in-place counting sort of one
//! decimal digit position that can recurse into each resulting bucket on the
//! next finer digit. [`radix_sort`] drives it over a whole slice.

mod algorithms;
mod error;
mod weight;

use std::ops::Range;

use log::debug;

pub use error::SortError;
pub use weight::DigitWeight;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortConfig {
    /// Recursive sub-ranges up to this length are finished by insertion sort
    /// instead of another counting pass. Zero disables the cutoff.
    pub insertion_threshold: usize,
}

pub const TUNED_CONFIG: SortConfig = SortConfig {
    insertion_threshold: 24,
};

/// Counters accumulated over a sort call and all of its recursive passes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub passes: usize,
    pub writes: usize,
    pub short_circuits: usize,
    pub insertion_sorts: usize,
}

/// Single counting pass over the whole slice on the digit of `weight`.
pub fn sort(data: &mut [u64], weight: DigitWeight) -> Result<SortStats, SortError> {
    let len = data.len();
    sort_range(data, weight, 0..len, false)
}

pub fn sort_range(
    data: &mut [u64],
    weight: DigitWeight,
    range: Range<usize>,
    recurse: bool,
) -> Result<SortStats, SortError> {
    sort_range_with_config(data, weight, range, recurse, &SortConfig::default())
}

/// Sorts `data[range]` by the digit of `weight` and, when `recurse` is set,
/// by every finer digit down to the ones digit.
///
/// The range is validated before anything is moved. A
/// [`SortError::Bookkeeping`] from any pass aborts the whole call.
pub fn sort_range_with_config(
    data: &mut [u64],
    weight: DigitWeight,
    range: Range<usize>,
    recurse: bool,
    config: &SortConfig,
) -> Result<SortStats, SortError> {
    let Range { start, end } = range;
    if start > end {
        return Err(SortError::InvertedRange { start, end });
    }
    if end > data.len() {
        return Err(SortError::RangeOutOfBounds {
            start,
            end,
            len: data.len(),
        });
    }

    let mut stats = SortStats::default();
    algorithms::counting_pass::counting_pass(
        &mut data[start..end],
        weight,
        recurse,
        config,
        &mut stats,
    )?;
    Ok(stats)
}

/// Full MSD radix sort starting from the leading digit of the maximum value.
pub fn radix_sort(data: &mut [u64]) -> Result<SortStats, SortError> {
    let Some(max) = algorithms::common::max_value(data) else {
        return Ok(SortStats::default());
    };
    let weight = DigitWeight::for_max(max);
    debug!("radix_sort len={} max={max} weight={weight}", data.len());

    let len = data.len();
    let stats = sort_range_with_config(data, weight, 0..len, true, &TUNED_CONFIG)?;
    debug!("radix_sort done {stats:?}");
    Ok(stats)
}
