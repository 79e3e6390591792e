/// Finishes a sub-range whose elements already agree on every digit above
/// the current weight, so whole-value order equals remaining-digit order.
#[inline]
pub fn insertion_sort(data: &mut [u64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        // Hot loop: unchecked accesses remove repeated bounds checks.
        unsafe {
            while j > 0 {
                let prev = *data.get_unchecked(j - 1);
                if prev <= key {
                    break;
                }
                *data.get_unchecked_mut(j) = prev;
                j -= 1;
            }
            *data.get_unchecked_mut(j) = key;
        }
    }
}

#[inline]
pub fn max_value(data: &[u64]) -> Option<u64> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold(first, |max, &x| max.max(x)))
}
