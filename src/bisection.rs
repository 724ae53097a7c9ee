//! Binary search (bisection) over an ordered integer answer space.
//!
//! This module provides the range type and the single-step helper shared by
//! every search in the crate. A [`SearchRange`] is an inclusive `[low, high]`
//! interval of candidate answers (array indices or root magnitudes). Each step
//! probes the midpoint and discards the half that cannot contain the answer.
//!
//! # Types and Functions
//!
//! - [`SearchRange`]: Non-empty inclusive range of candidates
//! - [`BisectionResult`]: Result of a single bisection step
//! - [`bisection_step`]: Probes the midpoint and narrows the range
//! - [`bisect`]: Repeats [`bisection_step`] until an exact hit or exhaustion
//!
//! Empty ranges are not representable: every narrowing operation returns
//! `None` instead of producing `low > high`, so unsigned indices never wrap.
//!
//! ```
//! use answer_search::bisection::{bisect, SearchRange};
//!
//! // Find the integer square root of 49 in [1, 49].
//! let range = SearchRange::new(1u64, 49).expect("1 <= 49");
//! let root = bisect(range, |mid| (mid * mid).cmp(&49));
//! assert_eq!(root, Some(7));
//! ```

use std::cmp::Ordering;

use num_integer::{Average, Integer};

/// Inclusive range `[low, high]` with `low <= high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRange<T> {
    low: T,
    high: T,
}

impl<T> SearchRange<T>
where
    T: Integer + Average + Clone,
{
    /// Creates a range, or `None` if `low > high`.
    pub fn new(low: T, high: T) -> Option<Self> {
        if low > high {
            return None;
        }
        Some(Self { low, high })
    }

    pub fn low(&self) -> &T {
        &self.low
    }

    pub fn high(&self) -> &T {
        &self.high
    }

    /// Returns `floor((low + high) / 2)` without overflowing.
    pub fn midpoint(&self) -> T {
        self.low.average_floor(&self.high)
    }

    /// Returns true if the range holds exactly one candidate.
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }

    /// Keeps `[mid + 1, high]`.
    pub fn above(&self, mid: &T) -> Option<Self> {
        if *mid >= self.high {
            return None;
        }
        Some(Self {
            low: mid.clone() + T::one(),
            high: self.high.clone(),
        })
    }

    /// Keeps `[low, mid - 1]`.
    pub fn below(&self, mid: &T) -> Option<Self> {
        if *mid <= self.low {
            return None;
        }
        Some(Self {
            low: self.low.clone(),
            high: mid.clone() - T::one(),
        })
    }

    /// Drops one candidate from each end: `[low + 1, high - 1]`.
    pub fn shrink_both(&self) -> Option<Self> {
        let low = self.low.clone() + T::one();
        if low >= self.high {
            return None;
        }
        Some(Self {
            low,
            high: self.high.clone() - T::one(),
        })
    }
}

/// Result of a single bisection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BisectionResult<T> {
    /// The probe missed; the answer, if any, lies in the returned range.
    Narrowed(SearchRange<T>),
    /// The midpoint is the answer.
    Exact(T),
    /// The probe missed and no candidates remain.
    Exhausted,
}

/// Performs a single bisection step.
///
/// # Arguments
///
/// * `range` - The current candidate range
/// * `compare` - Compares the probe at the midpoint to the target,
///   returning `Ordering::Less` if the probe is below the target (keep the upper half),
///   `Ordering::Greater` if it is above (keep the lower half),
///   or `Ordering::Equal` on an exact hit
pub fn bisection_step<T, C>(range: &SearchRange<T>, compare: C) -> BisectionResult<T>
where
    T: Integer + Average + Clone,
    C: FnOnce(&T) -> Ordering,
{
    let mid = range.midpoint();

    let next = match compare(&mid) {
        Ordering::Less => range.above(&mid),
        Ordering::Greater => range.below(&mid),
        Ordering::Equal => return BisectionResult::Exact(mid),
    };
    match next {
        Some(narrowed) => BisectionResult::Narrowed(narrowed),
        None => BisectionResult::Exhausted,
    }
}

/// Runs bisection steps until the comparison reports an exact hit.
///
/// Returns `None` once the range is exhausted. `compare` must be monotonic
/// in its argument for the result to be meaningful.
pub fn bisect<T, C>(mut range: SearchRange<T>, mut compare: C) -> Option<T>
where
    T: Integer + Average + Clone,
    C: FnMut(&T) -> Ordering,
{
    loop {
        match bisection_step(&range, &mut compare) {
            BisectionResult::Narrowed(next) => range = next,
            BisectionResult::Exact(mid) => return Some(mid),
            BisectionResult::Exhausted => return None,
        }
    }
}
