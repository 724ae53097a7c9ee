//! Shared test utilities for search tests.
//!
//! Sequence generators are driven by a seeded [`StdRng`] so every run sees the
//! same inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG for a test.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Rotates `seq` left by `k` positions: `seq[k..]` followed by `seq[..k]`.
///
/// The minimum of a rotated ascending sequence ends up at index
/// `(len - k) % len`.
///
/// # Examples
/// ```ignore
/// assert_eq!(rotate(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
/// ```
pub fn rotate<T: Clone>(seq: &[T], k: usize) -> Vec<T> {
    let mut rotated = seq.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_left(k % seq.len());
    }
    rotated
}

/// Strictly ascending sequence of `len` values starting somewhere in `-50..50`.
pub fn ascending_distinct(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let mut value = rng.gen_range(-50..50);
    (0..len)
        .map(|_| {
            let current = value;
            value += rng.gen_range(1..10);
            current
        })
        .collect()
}

/// Non-decreasing sequence of `len` values with frequent repeats.
pub fn ascending_with_duplicates(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let mut value = rng.gen_range(-5..5);
    (0..len)
        .map(|_| {
            let current = value;
            // Half of the steps repeat the previous value.
            value += rng.gen_range(0..2) * rng.gen_range(1..3);
            current
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_moves_prefix_to_end() {
        assert_eq!(rotate(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
        assert_eq!(rotate(&[1, 2, 3, 4], 4), vec![1, 2, 3, 4]);
        assert_eq!(rotate::<i32>(&[], 3), Vec::<i32>::new());
    }

    #[test]
    fn generators_are_sorted() {
        let mut rng = seeded_rng(5);
        let distinct = ascending_distinct(&mut rng, 50);
        assert!(distinct.windows(2).all(|pair| pair[0] < pair[1]));
        let repeated = ascending_with_duplicates(&mut rng, 50);
        assert!(repeated.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
