//! Pairs and ordered sequences.
//!
//! - [`Pair`]: an immutable two-value product, the return vehicle for splits,
//!   partitions and accumulations throughout the crate
//! - [`slice`]: pure search, fold, grouping and splitting helpers over slices,
//!   including the comparator-driven sorting the ordered map traversals use
//!
//! # Examples
//!
//! ```rust
//! use fpkit::sequence::{slice, Pair};
//!
//! let halves: Pair<Vec<i32>, Vec<i32>> = slice::split_at(&[1, 2, 3, 4], 1);
//! assert_eq!(halves.first(), &vec![1]);
//! assert_eq!(halves.second(), &vec![2, 3, 4]);
//! ```

mod pair;
pub mod slice;

pub use pair::Pair;
