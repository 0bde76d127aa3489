//! Median of two sorted sequences by partition search.
//!
//! Rather than merging, we look for a split of both inputs such that the
//! left pieces together hold `(len_a + len_b + 1) / 2` values and every
//! value on the left is `<=` every value on the right. Once the split is
//! known the median is read off its four boundary values.
//!
//! Only the shorter sequence is binary searched; the split in the longer one
//! is implied by the left-half size. That gives O(log(min(M, N))) probes and
//! keeps the implied split inside the longer sequence.
//!
//! Boundary values are `Option<T>`: `None` on the left of a split at index 0
//! acts as negative infinity, and `None` on the right of a split at the end
//! acts as positive infinity. No sentinel value is needed, so integer element
//! types cannot overflow.

use crate::error::{SearchError, Side};
use crate::profiling;
use crate::sorted::{Numeric, Sorted};

/// A split of two sequences into a left and right half of the merged order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Leading elements of the first sequence in the left half.
    pub from_a: usize,
    /// Leading elements of the second sequence in the left half.
    pub from_b: usize,
}

impl Partition {
    /// Total number of elements in the left half.
    pub fn left_len(&self) -> usize {
        return self.from_a + self.from_b;
    }
}

/// The four values adjacent to a split.
struct Boundary<T> {
    max_left_x: Option<T>,
    min_right_x: Option<T>,
    max_left_y: Option<T>,
    min_right_y: Option<T>,
}

impl<T: Copy + PartialOrd> Boundary<T> {
    fn at(x: &[T], y: &[T], partition_x: usize, partition_y: usize) -> Boundary<T> {
        return Boundary {
            max_left_x: partition_x.checked_sub(1).map(|i| x[i]),
            min_right_x: x.get(partition_x).copied(),
            max_left_y: partition_y.checked_sub(1).map(|i| y[i]),
            min_right_y: y.get(partition_y).copied(),
        };
    }

    /// The left piece of `x` reaches too far right.
    fn x_too_far_right(&self) -> bool {
        return !at_most(self.max_left_x, self.min_right_y);
    }

    /// The left piece of `x` stops too far left.
    fn x_too_far_left(&self) -> bool {
        return !at_most(self.max_left_y, self.min_right_x);
    }

    fn max_left(&self) -> Option<T> {
        return larger(self.max_left_x, self.max_left_y);
    }

    fn min_right(&self) -> Option<T> {
        return smaller(self.min_right_x, self.min_right_y);
    }
}

/// `left <= right`, where a missing value is the sentinel on its side.
#[inline]
fn at_most<T: PartialOrd>(left: Option<T>, right: Option<T>) -> bool {
    return match (left, right) {
        (Some(l), Some(r)) => l <= r,
        _ => true,
    };
}

#[inline]
fn larger<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Option<T> {
    return match (a, b) {
        (Some(a), Some(b)) => Some(if b > a { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    };
}

#[inline]
fn smaller<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Option<T> {
    return match (a, b) {
        (Some(a), Some(b)) => Some(if b < a { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    };
}

/// Size of the left half for `total` elements. Odd totals put the extra
/// element on the left, so the median of an odd total is its maximum.
#[inline]
fn half_len(total: usize) -> usize {
    return (total + 1) / 2;
}

/// Binary search for the split of `x`, which must not be longer than `y`.
///
/// Returns the split index into `x`; the split of `y` is
/// `half_len(x.len() + y.len()) - result`.
fn search<T: Copy + PartialOrd>(x: &[T], y: &[T]) -> usize {
    debug_assert!(x.len() <= y.len());
    let half = half_len(x.len() + y.len());

    let mut low = 0;
    let mut high = x.len();

    while low <= high {
        let partition_x = low + (high - low) / 2;
        let partition_y = half - partition_x;
        profiling::partition_probe();
        tracing::trace!(partition_x, partition_y, low, high, "probing partition");

        let boundary = Boundary::at(x, y, partition_x, partition_y);
        if boundary.x_too_far_right() {
            // max_left_x exists, so partition_x >= 1.
            high = partition_x - 1;
        } else if boundary.x_too_far_left() {
            low = partition_x + 1;
        } else {
            return partition_x;
        }
    }

    // Only reachable when an unchecked input was not actually sorted.
    return low.min(x.len());
}

/// Order two sequences so the first is never longer than the second.
/// The flag records whether they were swapped.
#[inline]
fn shorter_first<'s, T>(a: &'s [T], b: &'s [T]) -> (&'s [T], &'s [T], bool) {
    if a.len() > b.len() {
        return (b, a, true);
    }
    return (a, b, false);
}

/// Locate the split of two sorted sequences into the left and right halves
/// of their merged order.
///
/// Every value counted in the left half is `<=` every value in the right
/// half, and the left half holds `(len_a + len_b + 1) / 2` values.
pub fn partition<T: Numeric>(a: Sorted<'_, T>, b: Sorted<'_, T>) -> Partition {
    let (x, y, swapped) = shorter_first(a.as_slice(), b.as_slice());
    let partition_x = search(x, y);
    let partition_y = half_len(x.len() + y.len()) - partition_x;

    if swapped {
        return Partition { from_a: partition_y, from_b: partition_x };
    }
    return Partition { from_a: partition_x, from_b: partition_y };
}

/// Median of the merged order of two sorted views.
///
/// Fails only when both views are empty.
pub fn find_median_sorted<T: Numeric>(a: Sorted<'_, T>, b: Sorted<'_, T>) -> Result<f64, SearchError> {
    let total = a.len() + b.len();
    if total == 0 {
        return Err(SearchError::Empty);
    }
    profiling::median_search();

    let split = partition(a, b);
    let boundary = Boundary::at(a.as_slice(), b.as_slice(), split.from_a, split.from_b);

    return match (boundary.max_left(), boundary.min_right()) {
        (Some(max_left), _) if total % 2 == 1 => Ok(max_left.as_f64()),
        (Some(max_left), Some(min_right)) => Ok(midpoint(max_left.as_f64(), min_right.as_f64())),
        // The left half holds (total + 1) / 2 >= 1 values, and an even total
        // leaves as many on the right.
        _ => unreachable!("empty half in a split of {} values", total),
    };
}

/// Mean of two values.
///
/// Sums first so that no low bits are lost (subnormals stay exact), and only
/// halves first when the sum would leave the finite range.
#[inline]
fn midpoint(left: f64, right: f64) -> f64 {
    let sum = left + right;
    if sum.is_finite() {
        return sum / 2.0;
    }
    return left / 2.0 + right / 2.0;
}

/// Median of the merged order of two ascending slices.
///
/// Both slices are scanned for order first, so this checked path costs
/// O(M + N) and gives up the O(log(min(M, N))) bound of the search itself.
/// Use [`find_median_sorted`] with [`Sorted`] views built once up front to
/// keep each query logarithmic.
///
/// ```
/// use medley::median::find_median;
/// use medley::SearchError;
///
/// assert_eq!(find_median(&[1, 3, 4, 7, 10, 12], &[2, 3, 6, 15]), Ok(5.0));
/// assert_eq!(find_median::<u8>(&[], &[]), Err(SearchError::Empty));
/// ```
pub fn find_median<T: Numeric>(a: &[T], b: &[T]) -> Result<f64, SearchError> {
    let a = Sorted::new(a).map_err(|e| e.on(Side::Left))?;
    let b = Sorted::new(b).map_err(|e| e.on(Side::Right))?;
    return find_median_sorted(a, b);
}
