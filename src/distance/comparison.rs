use crate::positions::POSITION_RANGE;

/// Totals accumulated over the statements both sides actually answered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Comparison {
    comparable: usize,
    sum_diff: f64,
}

impl Comparison {
    pub(super) fn new(comparable: usize, sum_diff: f64) -> Self {
        Self { comparable, sum_diff }
    }

    /// Number of statements with a non-zero position on both sides.
    #[inline] pub fn comparable(&self) -> usize { self.comparable }

    /// True if no statement was answered by both sides.
    #[inline] pub fn is_empty(&self) -> bool { self.comparable == 0 }

    /// Sum of absolute position differences over the comparable statements.
    #[inline] pub fn sum_diff(&self) -> f64 { self.sum_diff }

    /// Worst-case `sum_diff` for this many comparable statements.
    #[inline] pub fn max_possible(&self) -> f64 { self.comparable as f64 * POSITION_RANGE }

    /// `sum_diff / max_possible`, or 0 when nothing is comparable.
    pub fn disagreement(&self) -> f64 {
        if self.is_empty() { return 0.0 }
        self.sum_diff / self.max_possible()
    }

    /// `(max_possible - sum_diff) / max_possible`, or 0 when nothing is comparable.
    /// This is the value [`distance`](fn@super::distance) reports.
    pub fn score(&self) -> f64 {
        if self.is_empty() { return 0.0 }
        let max_possible = self.max_possible();
        (max_possible - self.sum_diff) / max_possible
    }
}
