//! Error types for answer-space searches.
//!
//! # Absent results versus invalid input
//!
//! A search that runs to completion without finding anything (for example an
//! n-th root that is not an integer) is not an error: those operations return
//! `Option` or the [`NO_EXACT_ROOT`](crate::nth_root::NO_EXACT_ROOT) sentinel.
//! [`SearchError`] is reserved for calls that violate a precondition, where no
//! meaningful answer exists at all.

use std::fmt;

/// Errors that can occur when a search is invoked on invalid input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A minimum was requested from a sequence with no elements.
    EmptySequence,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "cannot search an empty sequence"),
        }
    }
}

impl std::error::Error for SearchError {}
