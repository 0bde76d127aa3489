//! Sorted slice views and the numeric element trait.
//!
//! A [`Sorted`] is a borrowed slice that has been shown to be in ascending
//! order, either by an O(n) scan in [`Sorted::new`] or by the caller's word in
//! [`Sorted::new_unchecked`]. Searches that rely on order take `Sorted` so the
//! check is paid once per input rather than once per query.

use std::ops::Deref;

use crate::error::{SearchError, Side};

/// Element types the searches operate on.
///
/// Ordering is only partial so that floats qualify; an unordered pair (NaN)
/// is reported as unsorted by [`Sorted::new`].
pub trait Numeric: Copy + PartialOrd {
    /// Convert to `f64` for averaging. Wide integers may round.
    fn as_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    return self as f64;
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Returned by [`Sorted::new`] when a slice is out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSorted {
    /// First index whose value is not `>=` the value before it.
    pub index: usize,
}

impl NotSorted {
    /// Attach the side of the search this slice was passed as.
    pub fn on(self, side: Side) -> SearchError {
        return SearchError::Unsorted { side, index: self.index };
    }
}

/// Find the first index that breaks ascending order, if any.
pub fn first_unsorted<T: PartialOrd>(values: &[T]) -> Option<usize> {
    return values
        .windows(2)
        .position(|pair| !(pair[0] <= pair[1]))
        .map(|i| i + 1);
}

/// A slice known to be sorted in ascending order. Duplicates are allowed.
#[derive(Debug, PartialEq)]
pub struct Sorted<'a, T> {
    values: &'a [T],
}

// Manual impls: a view is copyable regardless of whether `T` is.
impl<'a, T> Clone for Sorted<'a, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, T> Copy for Sorted<'a, T> {}

impl<'a, T: PartialOrd> Sorted<'a, T> {
    /// Check that `values` is ascending and wrap it.
    pub fn new(values: &'a [T]) -> Result<Sorted<'a, T>, NotSorted> {
        if let Some(index) = first_unsorted(values) {
            crate::profiling::rejected();
            tracing::debug!(index, len = values.len(), "rejecting unsorted input");
            return Err(NotSorted { index });
        }
        return Ok(Sorted { values });
    }

    /// Wrap `values` without scanning them.
    ///
    /// The caller guarantees ascending order. Debug builds still verify it.
    /// Passing an unsorted slice does not cause memory unsafety, only a
    /// meaningless search result.
    pub fn new_unchecked(values: &'a [T]) -> Sorted<'a, T> {
        debug_assert!(first_unsorted(values).is_none(), "slice is not sorted");
        return Sorted { values };
    }
}

impl<'a, T> Sorted<'a, T> {
    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        return self.values;
    }
}

impl<'a, T> Deref for Sorted<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        return self.values;
    }
}

impl<'a, T: PartialOrd> TryFrom<&'a [T]> for Sorted<'a, T> {
    type Error = NotSorted;

    fn try_from(values: &'a [T]) -> Result<Self, Self::Error> {
        return Sorted::new(values);
    }
}
