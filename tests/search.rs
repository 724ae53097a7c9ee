use std::num::NonZeroU32;

use answer_search::{
    find_min_distinct, find_min_with_duplicates, nth_root, nth_root_or_sentinel, rotation_offset,
    RootStrategy, SearchError, NO_EXACT_ROOT,
};

fn degree(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("degree must be non-zero")
}

#[test]
fn rotated_minimum_scenarios() {
    assert_eq!(find_min_distinct(&[4, 5, 6, 7, 0, 1, 2, 3]), Ok(0));
    assert_eq!(rotation_offset(&[4, 5, 6, 7, 0, 1, 2, 3]), Ok(4));
    assert_eq!(find_min_with_duplicates(&[2, 2, 2, 0, 1]), Ok(0));
    assert_eq!(find_min_distinct(&[17]), Ok(17));
}

#[test]
fn rotated_minimum_rejects_empty_input() {
    let empty: Vec<u32> = Vec::new();
    let err = find_min_distinct(&empty).expect_err("empty input must fail");
    assert_eq!(err, SearchError::EmptySequence);
    assert_eq!(err.to_string(), "cannot search an empty sequence");
}

#[test]
fn minimum_does_not_depend_on_rotation() {
    let sorted = [1, 1, 2, 3, 3, 3, 5, 8, 8, 13];
    for k in 0..sorted.len() {
        let mut rotated = sorted.to_vec();
        rotated.rotate_right(k);
        assert_eq!(find_min_with_duplicates(&rotated), Ok(1), "{rotated:?}");
    }
}

#[test]
fn minimum_works_for_any_ordered_type() {
    let words = ["melon", "peach", "apple", "fig", "grape"];
    assert_eq!(find_min_distinct(&words), Ok("apple"));
}

#[test]
fn root_scenarios() {
    for strategy in [RootStrategy::BruteForce, RootStrategy::Bisection] {
        assert_eq!(nth_root_or_sentinel(degree(3), 9, strategy), NO_EXACT_ROOT);
        assert_eq!(nth_root_or_sentinel(degree(2), 9, strategy), 3);
        assert_eq!(nth_root_or_sentinel(degree(3), 10, strategy), -1);
        assert_eq!(nth_root_or_sentinel(degree(5), 0, strategy), 0);
        assert_eq!(nth_root_or_sentinel(degree(1), 7, strategy), 7);
        assert_eq!(nth_root_or_sentinel(degree(4), 1, strategy), 1);
    }
}

#[test]
fn default_strategy_is_bisection() {
    assert_eq!(RootStrategy::default(), RootStrategy::Bisection);
    assert_eq!(nth_root(degree(5), 3_125, RootStrategy::default()), Some(5));
}
