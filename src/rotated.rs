//! Minimum of a rotated ascending sequence.
//!
//! A rotated sequence is an ascending sequence shifted cyclically by an
//! unknown offset, so it consists of two ascending runs where every value in
//! the second run is `<=` every value in the first. The minimum is the first
//! element of the second run (or the first element when the offset is zero).
//!
//! Each step looks at `seq[low]`, `seq[mid]` and `seq[high]` of the current
//! [`SearchRange`]:
//! - if `seq[low] <= seq[mid]` the left half is ascending, so `seq[low]` is its
//!   minimum and the left half is discarded;
//! - otherwise the rotation point lies in the left half and `seq[mid]` is the
//!   smallest value on the right, so the right half is discarded.
//!
//! With duplicates allowed, `seq[low] == seq[mid] == seq[high]` says nothing
//! about where the rotation point is (compare `[2, 2, 2, 0, 1]` with
//! `[2, 0, 1, 2, 2]`). That case is handled by its own branch that drops one
//! element from each end. It is the only step that does not halve the range,
//! and on an all-equal input it makes the search linear. The number of such
//! steps is reported in [`MinSearchStats::linear_shrinks`].

use tracing::trace;

use crate::bisection::SearchRange;
use crate::candidate::BestSoFar;
use crate::error::SearchError;

/// Step counts for a single minimum search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinSearchStats {
    /// Steps that discarded half of the range.
    pub halvings: usize,
    /// Steps that dropped one element from each end because the endpoints and
    /// midpoint were equal.
    pub linear_shrinks: usize,
}

/// Outcome of a minimum search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinSearch<T> {
    /// The smallest value in the sequence.
    pub minimum: T,
    /// An index holding `minimum`. For distinct elements this is the rotation
    /// offset.
    pub index: usize,
    pub stats: MinSearchStats,
}

/// Whether equal endpoints may hide the rotation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Elements {
    Distinct,
    WithDuplicates,
}

/// Returns the minimum of a rotated ascending sequence of distinct values.
///
/// Runs in `O(log n)`. The sequence is only read.
///
/// # Errors
///
/// Returns [`SearchError::EmptySequence`] if `seq` is empty.
///
/// # Examples
///
/// ```
/// use answer_search::rotated::find_min_distinct;
///
/// assert_eq!(find_min_distinct(&[4, 5, 6, 7, 0, 1, 2, 3]), Ok(0));
/// ```
pub fn find_min_distinct<T: Ord + Clone>(seq: &[T]) -> Result<T, SearchError> {
    search_min_distinct(seq).map(|found| found.minimum)
}

/// Returns the minimum of a rotated ascending sequence that may repeat values.
///
/// Runs in `O(log n)` unless many elements are equal, degrading to `O(n)` when
/// all of them are.
///
/// # Errors
///
/// Returns [`SearchError::EmptySequence`] if `seq` is empty.
///
/// # Examples
///
/// ```
/// use answer_search::rotated::find_min_with_duplicates;
///
/// assert_eq!(find_min_with_duplicates(&[2, 2, 2, 0, 1]), Ok(0));
/// ```
pub fn find_min_with_duplicates<T: Ord + Clone>(seq: &[T]) -> Result<T, SearchError> {
    search_min_with_duplicates(seq).map(|found| found.minimum)
}

/// Returns how many positions an ascending sequence of distinct values was
/// rotated by, which is the index of its minimum.
///
/// # Errors
///
/// Returns [`SearchError::EmptySequence`] if `seq` is empty.
pub fn rotation_offset<T: Ord + Clone>(seq: &[T]) -> Result<usize, SearchError> {
    search_min_distinct(seq).map(|found| found.index)
}

/// Like [`find_min_distinct`], also reporting where the minimum is and how
/// many steps the search took.
pub fn search_min_distinct<T: Ord + Clone>(seq: &[T]) -> Result<MinSearch<T>, SearchError> {
    search_min(seq, Elements::Distinct)
}

/// Like [`find_min_with_duplicates`], also reporting where the minimum is and
/// how many steps of each kind the search took.
pub fn search_min_with_duplicates<T: Ord + Clone>(
    seq: &[T],
) -> Result<MinSearch<T>, SearchError> {
    search_min(seq, Elements::WithDuplicates)
}

fn search_min<T: Ord + Clone>(seq: &[T], elements: Elements) -> Result<MinSearch<T>, SearchError> {
    let last = seq.len().checked_sub(1).ok_or(SearchError::EmptySequence)?;
    let mut range = SearchRange::new(0, last);
    let mut best = BestSoFar::new();
    let mut stats = MinSearchStats::default();

    while let Some(current) = range {
        let low = *current.low();
        let high = *current.high();
        let mid = current.midpoint();

        if elements == Elements::WithDuplicates
            && !current.is_single()
            && seq[low] == seq[mid]
            && seq[mid] == seq[high]
        {
            trace!(low, mid, high, "endpoints equal midpoint, shrinking both ends");
            best.offer((seq[low].clone(), low));
            stats.linear_shrinks += 1;
            range = current.shrink_both();
            continue;
        }

        // The whole range is ascending.
        if seq[low] <= seq[high] {
            best.offer((seq[low].clone(), low));
        }

        stats.halvings += 1;
        range = if seq[low] <= seq[mid] {
            best.offer((seq[low].clone(), low));
            current.above(&mid)
        } else {
            best.offer((seq[mid].clone(), mid));
            current.below(&mid)
        };
    }

    let (minimum, index) = best.into_inner().ok_or(SearchError::EmptySequence)?;
    trace!(index, ?stats, "minimum search finished");
    Ok(MinSearch {
        minimum,
        index,
        stats,
    })
}
