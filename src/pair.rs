//! Two-sum: index pairs whose values add up to a target.
//!
//! Both functions make a single pass, remembering the first index at which
//! each value was seen. At index `j` the partner value `target - nums[j]` is
//! looked up; a hit is a pair `(i, j)` with `i < j`.

use rustc_hash::FxHashMap;

/// Remembers the earliest index of each value seen so far.
struct Seen {
    first_index: FxHashMap<i64, usize>,
}

impl Seen {
    fn with_capacity(capacity: usize) -> Seen {
        let mut first_index = FxHashMap::default();
        first_index.reserve(capacity);
        return Seen { first_index };
    }

    /// Index of an earlier value that adds with `value` to `target`.
    fn partner(&self, target: i64, value: i64) -> Option<usize> {
        // An overflowing difference cannot be any i64 value.
        let wanted = target.checked_sub(value)?;
        return self.first_index.get(&wanted).copied();
    }

    fn remember(&mut self, value: i64, index: usize) {
        self.first_index.entry(value).or_insert(index);
    }
}

/// Find indices `(i, j)`, `i < j`, with `nums[i] + nums[j] == target`.
///
/// Among all such pairs the one with the smallest `j` is returned, and for
/// that `j` the smallest `i`. Runs in O(n) expected time.
///
/// ```
/// use medley::pair::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen = Seen::with_capacity(nums.len());
    for (j, &value) in nums.iter().enumerate() {
        if let Some(i) = seen.partner(target, value) {
            return Some((i, j));
        }
        seen.remember(value, j);
    }
    return None;
}

/// Every pair the one-pass scan discovers: for each index `j` that has an
/// earlier partner, the pair `(i, j)` with the smallest such `i`.
///
/// Pairs are ordered by `j`. Indices with several possible partners still
/// yield a single pair.
pub fn two_sum_all(nums: &[i64], target: i64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut seen = Seen::with_capacity(nums.len());
    for (j, &value) in nums.iter().enumerate() {
        if let Some(i) = seen.partner(target, value) {
            pairs.push((i, j));
        }
        seen.remember(value, j);
    }
    return pairs;
}
