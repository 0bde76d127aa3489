//! AFL fuzz harness for the partition median.
//!
//! The input bytes are split into two sequences which are sorted and handed
//! to the partition search. The result must match a straightforward merge,
//! be symmetric in its arguments, and fail only when both are empty.
//!
//! Run with `cargo afl build --features afl --bin fuzz_median`.

use afl::fuzz;
use medley::SearchError;
use medley::median::find_median;

/// Decode the fuzz input: first byte picks the split point, the rest are
/// signed values.
fn split_input(data: &[u8]) -> Option<(Vec<i64>, Vec<i64>)> {
    let (&split, rest) = data.split_first()?;
    let values: Vec<i64> = rest.iter().map(|b| *b as i8 as i64).collect();
    let at = split as usize % (values.len() + 1);

    let mut a = values[..at].to_vec();
    let mut b = values[at..].to_vec();
    a.sort_unstable();
    b.sort_unstable();
    return Some((a, b));
}

fn merged_median(a: &[i64], b: &[i64]) -> Option<f64> {
    let mut merged: Vec<i64> = a.iter().chain(b).copied().collect();
    merged.sort_unstable();
    if merged.is_empty() {
        return None;
    }
    let mid = merged.len() / 2;
    if merged.len() % 2 == 0 {
        let (l, r) = (merged[mid - 1] as f64, merged[mid] as f64);
        let sum = l + r;
        if sum.is_finite() {
            return Some(sum / 2.0);
        }
        return Some(l / 2.0 + r / 2.0);
    }
    return Some(merged[mid] as f64);
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((a, b)) = split_input(data) else {
            return;
        };

        let result = find_median(&a, &b);
        assert_eq!(result, find_median(&b, &a), "asymmetric for {:?} / {:?}", a, b);

        match merged_median(&a, &b) {
            Some(expected) => assert_eq!(result, Ok(expected), "wrong median for {:?} / {:?}", a, b),
            None => assert_eq!(result, Err(SearchError::Empty)),
        }
    });
}
