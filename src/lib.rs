//! Medley - search and two-pointer algorithms over in-memory sequences.
//!
//! The centerpiece is [`median::find_median`], which finds the median of two
//! sorted sequences in O(log(min(M, N))) by binary searching for a partition
//! instead of merging. The sibling modules cover the classic array searches
//! that share its pure, allocation-light shape.
//!
//! # Quick Start
//!
//! ```
//! use medley::median::find_median;
//!
//! assert_eq!(find_median(&[1, 3], &[2]), Ok(2.0));
//! assert_eq!(find_median(&[1, 2], &[3, 4]), Ok(2.5));
//! assert!(find_median::<i32>(&[], &[]).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Problem | Technique |
//! |--------|---------|-----------|
//! | `median` | Median of two sorted sequences | Partition binary search |
//! | `pair` | Two-sum | One-pass hash map |
//! | `triple` | Three-sum | Sort + two pointers |
//! | `water` | Container with most water | Two pointers |
//! | `rank` | Smaller numbers than current | Sort + lower bound |

pub mod error;
pub mod median;
pub mod pair;
pub mod profiling;
pub mod rank;
pub mod sorted;
pub mod triple;
pub mod water;

pub use error::SearchError;
pub use sorted::Sorted;
