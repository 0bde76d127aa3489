//! Property-based tests for the partition median against the merge oracle.

use proptest::prelude::*;

use medley::SearchError;
use medley::Sorted;
use medley::median::{find_median, find_median_sorted, partition};

// =============================================================================
// Test helpers
// =============================================================================

/// A sorted vector of small integers, so duplicates are common.
fn sorted_vec(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    return prop::collection::vec(-50i64..50, 0..max_len).prop_map(|mut values| {
        values.sort();
        values
    });
}

/// Finite floats of either sign across the whole range, subnormals included.
fn any_finite_f64() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    return prop_oneof![
        POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO,
        POSITIVE | NEGATIVE | SUBNORMAL,
    ];
}

fn sorted_f64_vec(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    return prop::collection::vec(any_finite_f64(), 0..max_len).prop_map(|mut values| {
        values.sort_by(f64::total_cmp);
        values
    });
}

/// Merge-and-pick median for floats, averaging the middle pair by summing
/// and halving unless the sum overflows.
fn float_merge_median(a: &[f64], b: &[f64]) -> Option<f64> {
    let mut merged: Vec<f64> = a.iter().chain(b).copied().collect();
    merged.sort_by(f64::total_cmp);
    if merged.is_empty() {
        return None;
    }
    let mid = merged.len() / 2;
    if merged.len() % 2 == 1 {
        return Some(merged[mid]);
    }
    let (l, r) = (merged[mid - 1], merged[mid]);
    let sum = l + r;
    if sum.is_finite() {
        return Some(sum / 2.0);
    }
    return Some(l / 2.0 + r / 2.0);
}

/// Two sorted vectors that are not both empty.
fn sorted_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    return (sorted_vec(40), sorted_vec(40)).prop_filter("both empty", |(a, b)| !(a.is_empty() && b.is_empty()));
}

// =============================================================================
// Median properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The partition search agrees with merging and picking the middle.
    #[test]
    fn matches_merge_oracle((a, b) in sorted_pair()) {
        let expected = naive::merge_median(&a, &b);
        prop_assert_eq!(find_median(&a, &b).ok(), expected);
    }

    /// Argument order does not matter.
    #[test]
    fn symmetric((a, b) in sorted_pair()) {
        prop_assert_eq!(find_median(&a, &b), find_median(&b, &a));
    }

    /// Calls are pure: same answer twice and the inputs are unchanged.
    #[test]
    fn pure((a, b) in sorted_pair()) {
        let (a_before, b_before) = (a.clone(), b.clone());
        let first = find_median(&a, &b);
        let second = find_median(&a, &b);
        prop_assert_eq!(first, second);
        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }

    /// The unchecked path gives the same answer on sorted input.
    #[test]
    fn unchecked_matches_checked((a, b) in sorted_pair()) {
        let unchecked = find_median_sorted(Sorted::new_unchecked(&a[..]), Sorted::new_unchecked(&b[..]));
        prop_assert_eq!(unchecked, find_median(&a, &b));
    }

    /// The median lies between the smallest and largest input value.
    #[test]
    fn bounded_by_extremes((a, b) in sorted_pair()) {
        let median = find_median(&a, &b).unwrap();
        let low = a.first().into_iter().chain(b.first()).min().copied().unwrap();
        let high = a.last().into_iter().chain(b.last()).max().copied().unwrap();
        prop_assert!(low as f64 <= median && median <= high as f64);
    }

    /// The located split has the right size and separates the halves.
    #[test]
    fn partition_is_valid(a in sorted_vec(40), b in sorted_vec(40)) {
        let split = partition(Sorted::new(&a[..]).unwrap(), Sorted::new(&b[..]).unwrap());
        prop_assert_eq!(split.left_len(), (a.len() + b.len() + 1) / 2);
        prop_assert!(split.from_a <= a.len());
        prop_assert!(split.from_b <= b.len());

        let left_max = a[..split.from_a].iter().chain(&b[..split.from_b]).max();
        let right_min = a[split.from_a..].iter().chain(&b[split.from_b..]).min();
        if let (Some(l), Some(r)) = (left_max, right_min) {
            prop_assert!(l <= r);
        }
    }

    /// Any descent in either input is rejected rather than answered.
    #[test]
    fn unsorted_is_rejected(mut a in prop::collection::vec(-50i64..50, 2..30), b in sorted_vec(10)) {
        a.sort();
        a.reverse();
        prop_assume!(a.first() != a.last());
        let result = find_median(&a, &b);
        prop_assert!(matches!(result, Err(SearchError::Unsorted { .. })), "got {:?}", result);
    }

    /// Floats behave like their integer counterparts.
    #[test]
    fn floats_match_integers((a, b) in sorted_pair()) {
        let af: Vec<f64> = a.iter().map(|v| *v as f64).collect();
        let bf: Vec<f64> = b.iter().map(|v| *v as f64).collect();
        prop_assert_eq!(find_median(&af, &bf), find_median(&a, &b));
    }

    /// Full-range and subnormal floats agree with merging and picking.
    #[test]
    fn floats_match_merge_oracle(a in sorted_f64_vec(30), b in sorted_f64_vec(30)) {
        prop_assume!(!(a.is_empty() && b.is_empty()));
        prop_assert_eq!(find_median(&a, &b).ok(), float_merge_median(&a, &b));
    }

    /// Two copies of one value have that value as their median.
    #[test]
    fn duplicate_float_is_its_own_median(x in any_finite_f64()) {
        prop_assert_eq!(find_median(&[x], &[x]), Ok(x));
        prop_assert_eq!(find_median(&[x, x], &[x, x]), Ok(x));
    }
}
