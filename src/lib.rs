#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Answer-space binary search.
//!
//! Each search in this crate narrows an inclusive range of candidate answers
//! by probing its midpoint and discarding the half that cannot hold the
//! answer:
//!
//! - [`rotated`]: minimum of a rotated ascending sequence, with or without
//!   duplicate values, and the rotation offset
//! - [`nth_root`]: exact integer n-th roots, by brute force or bisection, for
//!   machine words and for [`BigUint`](num_bigint::BigUint)
//!
//! The shared pieces are [`bisection`] (range and step), [`candidate`]
//! (best-so-far accumulator) and [`power`] (overflow-safe power comparison).
//!
//! ```
//! use std::num::NonZeroU32;
//! use answer_search::{find_min_distinct, nth_root, RootStrategy};
//!
//! assert_eq!(find_min_distinct(&[4, 5, 6, 7, 0, 1, 2, 3]), Ok(0));
//!
//! let square = NonZeroU32::new(2).expect("non-zero");
//! assert_eq!(nth_root(square, 9, RootStrategy::Bisection), Some(3));
//! ```

pub mod bisection;
pub mod candidate;
mod error;
pub mod nth_root;
pub mod power;
pub mod rotated;

#[cfg(test)]
mod test_utils;

pub use error::SearchError;
pub use nth_root::{nth_root, nth_root_big, nth_root_or_sentinel, RootStrategy, NO_EXACT_ROOT};
pub use rotated::{
    find_min_distinct, find_min_with_duplicates, rotation_offset, MinSearch, MinSearchStats,
};
