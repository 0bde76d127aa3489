//! Smaller numbers than current: per element, how many values are below it.

/// For each `nums[i]`, the number of `j` with `nums[j] < nums[i]`.
///
/// Sorts a copy once; the count for a value is then the position of its
/// first occurrence in sorted order, found by binary search. O(n log n).
///
/// ```
/// use medley::rank::smaller_numbers_than_current;
///
/// assert_eq!(smaller_numbers_than_current(&[8, 1, 2, 2, 3]), vec![4, 0, 1, 1, 3]);
/// ```
pub fn smaller_numbers_than_current(nums: &[i64]) -> Vec<usize> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    return nums
        .iter()
        .map(|value| lower_bound(&sorted, *value))
        .collect();
}

/// First index in `sorted` whose value is not less than `value`.
fn lower_bound(sorted: &[i64], value: i64) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    return lo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_duplicates() {
        assert_eq!(smaller_numbers_than_current(&[8, 1, 2, 2, 3]), vec![4, 0, 1, 1, 3]);
    }

    #[test]
    fn distinct_values() {
        assert_eq!(smaller_numbers_than_current(&[6, 5, 4, 8]), vec![2, 1, 0, 3]);
    }

    #[test]
    fn all_equal() {
        assert_eq!(smaller_numbers_than_current(&[7, 7, 7, 7]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn empty_input() {
        assert!(smaller_numbers_than_current(&[]).is_empty());
    }

    #[test]
    fn negative_values() {
        assert_eq!(smaller_numbers_than_current(&[-1, -5, 0, -5]), vec![2, 0, 3, 0]);
    }

    #[test]
    fn lower_bound_matches_partition_point() {
        let sorted = [1, 2, 2, 2, 5, 9];
        for value in -1..11 {
            assert_eq!(lower_bound(&sorted, value), sorted.partition_point(|v| *v < value));
        }
    }
}
