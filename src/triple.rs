//! Three-sum: unique triplets that add up to zero.

/// All unique triplets `[a, b, c]` with `a + b + c == 0`.
///
/// Each triplet is ascending and the list is in lexicographic order. The
/// input is copied and sorted; for each distinct first value the remaining
/// two are found by closing two pointers over the rest. O(n²) time.
///
/// ```
/// use medley::triple::three_sum;
///
/// assert_eq!(three_sum(&[-1, 0, 1, 2, -1, -4]), vec![[-1, -1, 2], [-1, 0, 1]]);
/// ```
pub fn three_sum(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut triplets = Vec::new();
    for first in 0..sorted.len() {
        let a = sorted[first];
        if first > 0 && a == sorted[first - 1] {
            continue;
        }
        // Everything after is at least `a`, so no zero sum is left.
        if a > 0 {
            break;
        }

        let mut left = first + 1;
        let mut right = sorted.len() - 1;
        while left < right {
            let (b, c) = (sorted[left], sorted[right]);
            // Widen so that three extreme values cannot overflow.
            let sum = a as i128 + b as i128 + c as i128;
            if sum == 0 {
                triplets.push([a, b, c]);
                left += 1;
                while left < right && sorted[left] == sorted[left - 1] {
                    left += 1;
                }
                right -= 1;
            } else if sum > 0 {
                right -= 1;
            } else {
                left += 1;
            }
        }
    }
    return triplets;
}
