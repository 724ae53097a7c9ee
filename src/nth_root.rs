//! Exact integer n-th roots.
//!
//! Finds `r` with `r^n == m` exactly, or reports that no such integer exists.
//! Two interchangeable strategies are provided:
//! - [`RootStrategy::BruteForce`] probes `r = 1, 2, ...` and stops at the
//!   first `r` with `r^n >= m`. `O(m^(1/n) * n)` multiplications.
//! - [`RootStrategy::Bisection`] bisects `[1, m]` on the ordering of `mid^n`
//!   against `m`. `O(n * log m)` multiplications.
//!
//! Both compare powers through [`compare_power`], which never lets `r^n`
//! overflow into a false match.
//!
//! The degenerate inputs `m == 0`, `m == 1` and `n == 1` are their own roots
//! and are answered without searching. The degree is a [`NonZeroU32`]: the
//! zeroth root is not defined.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::bisection::{bisect, SearchRange};
use crate::power::{compare_biguint_power, compare_power};

/// Returned by [`nth_root_or_sentinel`] when `m` has no exact integer root.
pub const NO_EXACT_ROOT: i64 = -1;

/// How to search for an n-th root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RootStrategy {
    /// Try every candidate in ascending order.
    BruteForce,
    /// Binary search over `[1, m]`.
    #[default]
    Bisection,
}

impl fmt::Display for RootStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce => write!(f, "brute-force"),
            Self::Bisection => write!(f, "bisection"),
        }
    }
}

/// Returns `r` such that `r^n == m`, or `None` if no integer `r` exists.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use answer_search::nth_root::{nth_root, RootStrategy};
///
/// let square = NonZeroU32::new(2).expect("non-zero");
/// let cube = NonZeroU32::new(3).expect("non-zero");
/// assert_eq!(nth_root(square, 9, RootStrategy::Bisection), Some(3));
/// assert_eq!(nth_root(cube, 9, RootStrategy::BruteForce), None);
/// ```
pub fn nth_root(n: NonZeroU32, m: u64, strategy: RootStrategy) -> Option<u64> {
    if m <= 1 || n.get() == 1 {
        return Some(m);
    }
    let root = match strategy {
        RootStrategy::BruteForce => brute_force_root(n.get(), m),
        RootStrategy::Bisection => bisection_root(n.get(), m),
    };
    debug!(n = n.get(), m, %strategy, ?root, "n-th root search finished");
    root
}

/// Like [`nth_root`], but over signed radicands and returning
/// [`NO_EXACT_ROOT`] (`-1`) when there is no exact root.
///
/// A negative `m` has no root in `[1, m]` and yields `-1`.
pub fn nth_root_or_sentinel(n: NonZeroU32, m: i64, strategy: RootStrategy) -> i64 {
    let Ok(radicand) = u64::try_from(m) else {
        return NO_EXACT_ROOT;
    };
    nth_root(n, radicand, strategy)
        .and_then(|root| i64::try_from(root).ok())
        .unwrap_or(NO_EXACT_ROOT)
}

/// Returns `r` such that `r^n == m` for an arbitrary-precision radicand.
///
/// Always bisects; a linear scan over a `BigUint` range is not practical.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use answer_search::nth_root::nth_root_big;
/// use num_bigint::BigUint;
///
/// let m = BigUint::from(1u8) << 300usize;
/// let cube = NonZeroU32::new(3).expect("non-zero");
/// assert_eq!(nth_root_big(cube, &m), Some(BigUint::from(1u8) << 100usize));
/// ```
pub fn nth_root_big(n: NonZeroU32, m: &BigUint) -> Option<BigUint> {
    if *m <= BigUint::one() || n.get() == 1 {
        return Some(m.clone());
    }
    // r <= 2^ceil(bits(m) / n) bounds the search well below m.
    let bound = BigUint::one() << m.bits().div_ceil(u64::from(n.get()));
    let range = SearchRange::new(BigUint::one(), bound.min(m.clone()))?;
    let root = bisect(range, |mid| compare_biguint_power(mid, n.get(), m));
    debug!(n = n.get(), bits = m.bits(), found = root.is_some(), "big n-th root search finished");
    root
}

fn brute_force_root(n: u32, m: u64) -> Option<u64> {
    let mut candidate: u64 = 1;
    loop {
        match compare_power(candidate, n, m) {
            Ordering::Equal => return Some(candidate),
            // r^n is increasing in r: nothing larger can match.
            Ordering::Greater => return None,
            Ordering::Less => candidate = candidate.checked_add(1)?,
        }
    }
}

fn bisection_root(n: u32, m: u64) -> Option<u64> {
    let range = SearchRange::new(1, m)?;
    bisect(range, |mid| compare_power(*mid, n, m))
}

/// Returns true if `m` is a perfect n-th power.
pub fn is_perfect_power(n: NonZeroU32, m: u64) -> bool {
    nth_root(n, m, RootStrategy::Bisection).is_some()
}
