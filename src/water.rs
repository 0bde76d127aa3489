//! Container with most water.
//!
//! Lines of height `heights[i]` stand at `x = i`. Any two lines and the x
//! axis form a container holding `min(heights[i], heights[j]) * (j - i)`.

/// Largest container formed by any two lines, or `None` with fewer than two.
///
/// Starts with the widest container and moves the shorter side inward: the
/// shorter line bounds every narrower container that keeps it, so dropping
/// it loses nothing. O(n) time.
///
/// ```
/// use medley::water::max_area;
///
/// assert_eq!(max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), Some(49));
/// ```
pub fn max_area(heights: &[u64]) -> Option<u64> {
    if heights.len() < 2 {
        return None;
    }

    let mut best = 0;
    let mut left = 0;
    let mut right = heights.len() - 1;
    while left < right {
        let width = (right - left) as u64;
        let area = heights[left].min(heights[right]).saturating_mul(width);
        best = best.max(area);

        if heights[left] > heights[right] {
            right -= 1;
        } else {
            left += 1;
        }
    }
    return Some(best);
}
