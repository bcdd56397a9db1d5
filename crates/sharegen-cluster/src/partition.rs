//! Even splitting of a guest population into buckets.

/// Split `total` into `buckets` sizes that differ by at most one.
///
/// The remainder goes to the first buckets, so sizes are non-increasing.
/// Returns an empty vector when `buckets` is zero.
pub fn partition_evenly(total: u32, buckets: u32) -> Vec<u32> {
    if buckets == 0 {
        return Vec::new();
    }
    let base = total / buckets;
    let remainder = total % buckets;
    (0..buckets)
        .map(|i| base + u32::from(i < remainder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn remainder_goes_first() {
        assert_eq!(partition_evenly(40, 9), vec![5, 5, 5, 5, 4, 4, 4, 4, 4]);
        assert_eq!(partition_evenly(7, 3), vec![3, 2, 2]);
    }

    #[test]
    fn exact_division() {
        assert_eq!(partition_evenly(6, 3), vec![2, 2, 2]);
    }

    #[test]
    fn zero_buckets() {
        assert!(partition_evenly(5, 0).is_empty());
    }

    proptest! {
        #[test]
        fn sums_to_total_and_balanced(total in 0u32..500, buckets in 1u32..50) {
            let sizes = partition_evenly(total, buckets);
            prop_assert_eq!(sizes.len(), buckets as usize);
            prop_assert_eq!(sizes.iter().sum::<u32>(), total);
            let max = sizes.iter().copied().max().unwrap_or(0);
            let min = sizes.iter().copied().min().unwrap_or(0);
            prop_assert!(max - min <= 1);
            prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
