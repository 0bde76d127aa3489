//! Errors returned when an input violates a search precondition.

use std::fmt;

/// Which of the two input sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first argument.
    Left,
    /// The second argument.
    Right,
}

/// Error returned when a search cannot produce a meaningful answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Both sequences were empty, so there is no median to find.
    Empty,
    /// A sequence was not in ascending order.
    ///
    /// `index` is the first position whose value is smaller than (or
    /// unordered with) the value before it.
    Unsorted { side: Side, index: usize },
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Empty => f.write_str("both sequences are empty"),
            SearchError::Unsorted { side, index } => {
                write!(f, "{} sequence is not sorted at index {}", side, index)
            }
        }
    }
}

impl std::error::Error for SearchError {}
