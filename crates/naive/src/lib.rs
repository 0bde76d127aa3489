//! Textbook brute-force solutions to the problems in `medley`.
//!
//! Every function here does the obvious thing: merge everything, try every
//! pair, scan linearly. They are slow on purpose and easy to check by eye,
//! which makes them useful as:
//!
//! - Oracles for property tests of the optimised implementations
//! - Baselines in benchmarks
//! - Reading material before the two-pointer and partition versions
//!
//! | Function | Approach | Cost |
//! |----------|----------|------|
//! | `merge_median` | Two-way merge into a buffer | O(M + N) time and space |
//! | `two_sum` | Every pair | O(n²) |
//! | `three_sum` | Per first value, dictionary two-sum over the rest | O(n²) plus dedup |
//! | `max_area` | Every pair | O(n²) |
//! | `smaller_numbers_than_current` | Sort, then linear first-occurrence search | O(n²) |
//!
//! # Example
//!
//! ```
//! assert_eq!(naive::merge_median(&[1, 3], &[2]), Some(2.0));
//! assert_eq!(naive::two_sum(&[3, 2, 4], 6), Some((1, 2)));
//! ```

use rustc_hash::FxHashMap;

/// Median of two ascending slices by merging them. `None` if both are empty.
pub fn merge_median(a: &[i64], b: &[i64]) -> Option<f64> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);

    if merged.is_empty() {
        return None;
    }
    let mid = merged.len() / 2;
    if merged.len() % 2 == 0 {
        return Some((merged[mid - 1] as f64 + merged[mid] as f64) / 2.0);
    }
    return Some(merged[mid] as f64);
}

/// First pair `(i, j)`, `i < j`, by smallest `j` then smallest `i`, with
/// `nums[i] + nums[j] == target`.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for j in 0..nums.len() {
        for i in 0..j {
            if nums[i].checked_add(nums[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }
    return None;
}

/// Every pair `(i, j)` with `i < j` found by a dictionary scan: the value at
/// `j` is matched against the first index of its complement seen so far.
fn dictionary_pairs(nums: &[i64], target: i64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (j, &value) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(value).and_then(|want| seen.get(&want)) {
            pairs.push((i, j));
        }
        seen.entry(value).or_insert(j);
    }
    return pairs;
}

/// Unique zero-sum triplets, each ascending, in lexicographic order.
pub fn three_sum(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort();

    let mut output: Vec<[i64; 3]> = Vec::new();
    for (index, &first) in sorted.iter().enumerate() {
        if index > 0 && sorted[index - 1] == first {
            continue;
        }
        let rest = &sorted[index + 1..];
        let Some(want) = first.checked_neg() else {
            continue;
        };
        for (i, j) in dictionary_pairs(rest, want) {
            let triplet = [first, rest[i], rest[j]];
            if !output.contains(&triplet) {
                output.push(triplet);
            }
        }
    }
    output.sort();
    return output;
}

/// Largest `min(h[i], h[j]) * (j - i)` over all pairs, trying every pair.
pub fn max_area(heights: &[u64]) -> Option<u64> {
    let mut best = None;
    for i in 0..heights.len() {
        for j in i + 1..heights.len() {
            let area = heights[i].min(heights[j]).saturating_mul((j - i) as u64);
            best = Some(best.map_or(area, |b: u64| b.max(area)));
        }
    }
    return best;
}

/// For each value, the index of its first occurrence in sorted order.
pub fn smaller_numbers_than_current(nums: &[i64]) -> Vec<usize> {
    let mut sorted = nums.to_vec();
    sorted.sort();
    return nums
        .iter()
        .map(|value| sorted.iter().position(|v| v == value).unwrap_or(0))
        .collect();
}
