//! Best-so-far accumulator for minimum searches.

/// Smallest candidate offered so far.
///
/// Starts empty, so an input that never produces a candidate is reported as
/// `None` rather than a value such as `i64::MAX` that looks like a real answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSoFar<T> {
    best: Option<T>,
}

impl<T> Default for BestSoFar<T> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<T: Ord> BestSoFar<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `candidate` if it is smaller than the current best.
    ///
    /// Ties keep the earlier candidate.
    pub fn offer(&mut self, candidate: T) {
        match &self.best {
            Some(best) if *best <= candidate => {}
            _ => self.best = Some(candidate),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.best.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }

    pub fn into_inner(self) -> Option<T> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_offered() {
        let best: BestSoFar<i32> = BestSoFar::new();
        assert!(best.is_empty());
        assert_eq!(best.into_inner(), None);
    }

    #[test]
    fn keeps_smallest() {
        let mut best = BestSoFar::new();
        for value in [5, 3, 9, 3, 4] {
            best.offer(value);
        }
        assert_eq!(best.get(), Some(&3));
    }

    #[test]
    fn extreme_values_are_real_candidates() {
        let mut best = BestSoFar::new();
        best.offer(i64::MAX);
        assert_eq!(best.into_inner(), Some(i64::MAX));
    }

    #[test]
    fn tuple_candidates_break_ties_by_second_field() {
        // (value, index) pairs compare by value first; equal values fall back to index.
        let mut best = BestSoFar::new();
        best.offer((1, 4usize));
        best.offer((1, 2usize));
        assert_eq!(best.get(), Some(&(1, 2)));
    }
}
