use log::trace;

use crate::weight::RADIX;
use crate::{DigitWeight, SortConfig, SortError, SortStats};

use super::common;

/// In-place counting sort of `data` on the digit selected by `weight`.
///
/// Offsets act as moving write cursors and counts as the number of
/// still-unplaced elements per bucket, so placement follows permutation
/// cycles with swaps instead of scattering into a second buffer. When
/// `recurse` is set, each bucket is sorted on the next finer digit as soon
/// as it closes.
pub(crate) fn counting_pass(
    data: &mut [u64],
    weight: DigitWeight,
    recurse: bool,
    config: &SortConfig,
    stats: &mut SortStats,
) -> Result<(), SortError> {
    let len = data.len();
    if len < 2 {
        return Ok(());
    }
    stats.passes += 1;

    let mut counts = [0usize; RADIX];
    let mut last = 0usize;
    for &x in data.iter() {
        last = weight.digit(x);
        counts[last] += 1;
    }

    let finer = if recurse { weight.finer() } else { None };

    if counts[last] == len {
        stats.short_circuits += 1;
        trace!("weight={weight} len={len}: all values in bucket {last}");
        if let Some(finer) = finer {
            descend(data, finer, config, stats)?;
        }
        return Ok(());
    }

    let mut offsets = [0usize; RADIX];
    let mut sum = 0usize;
    for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
        *offset = sum;
        sum += count;
    }

    // next_bucket[b] is the next greater non-empty bucket; 0 terminates the
    // chain since bucket 0 can never follow another bucket.
    let mut next_bucket = [0usize; RADIX];
    let mut head = 0usize;
    for bucket in (0..RADIX).rev() {
        if counts[bucket] != 0 {
            next_bucket[bucket] = head;
            head = bucket;
        }
    }

    trace!(
        "weight={weight} len={len} counts={counts:?} offsets={offsets:?} chain_head={head} chain={next_bucket:?}"
    );

    let mut writes = 0usize;
    let mut read = 0usize;
    let mut bucket_start = 0usize;
    let mut value = data[0];

    while read < len {
        let bucket = weight.digit(value);
        let write = offsets[bucket];
        if counts[bucket] == 0 || write < read {
            return Err(SortError::Bookkeeping {
                expected: len,
                actual: writes,
            });
        }
        offsets[bucket] += 1;
        counts[bucket] -= 1;

        if write != read {
            // Park the value in its bucket and pick up the one it displaces.
            std::mem::swap(&mut value, &mut data[write]);
            writes += 1;
            continue;
        }

        data[read] = value;
        writes += 1;
        read += 1;

        if counts[bucket] == 0 {
            // The bucket is full. Close it together with any following
            // buckets that were completely filled by swaps, then jump to the
            // first unplaced slot of the next open bucket.
            read = offsets[bucket];
            close_bucket(data, bucket_start, read, finer, config, stats)?;
            bucket_start = read;

            let mut next = next_bucket[bucket];
            while next != 0 && counts[next] == 0 {
                read = offsets[next];
                close_bucket(data, bucket_start, read, finer, config, stats)?;
                bucket_start = read;
                next = next_bucket[next];
            }

            read = if next != 0 { offsets[next] } else { len };
        }

        if read < len {
            value = data[read];
        }
    }

    stats.writes += writes;
    if writes != len {
        return Err(SortError::Bookkeeping {
            expected: len,
            actual: writes,
        });
    }
    Ok(())
}

fn close_bucket(
    data: &mut [u64],
    start: usize,
    end: usize,
    finer: Option<DigitWeight>,
    config: &SortConfig,
    stats: &mut SortStats,
) -> Result<(), SortError> {
    trace!("closed bucket range {start}..{end}");
    match finer {
        Some(finer) => descend(&mut data[start..end], finer, config, stats),
        None => Ok(()),
    }
}

fn descend(
    data: &mut [u64],
    weight: DigitWeight,
    config: &SortConfig,
    stats: &mut SortStats,
) -> Result<(), SortError> {
    match data.len() {
        0 | 1 => Ok(()),
        n if n <= config.insertion_threshold => {
            stats.insertion_sorts += 1;
            common::insertion_sort(data);
            Ok(())
        }
        _ => counting_pass(data, weight, true, config, stats),
    }
}
