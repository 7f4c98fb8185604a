use crate::{distance::Comparison, positions::PositionSet};

/// Collect the comparison totals for two position sets.
///
/// Only statements with a non-zero position on *both* sides count; anything
/// skipped or never asked on either side is left out entirely. The walk goes
/// over the smaller set in statement order, so swapping `a` and `b` sums the
/// same terms in the same order.
pub fn compare(a: &PositionSet, b: &PositionSet) -> Comparison {
    let (small, large) = if b.len() < a.len() { (b, a) } else { (a, b) };

    let (comparable, sum_diff) = small.iter()
        .filter_map(|(id, x)| {
            let y = large.value(id);
            (y != 0.0).then(|| (x - y).abs())
        })
        .fold((0usize, 0.0f64), |(n, sum), diff| (n + 1, sum + diff));

    Comparison::new(comparable, sum_diff)
}

/// Normalized score between two position sets, in `[0, 1]`.
///
/// Over the comparable statements `K`, the result is
/// `(|K| * 4 - Σ|a - b|) / (|K| * 4)`. If `K` is empty the result is `0`.
///
/// The `[0, 1]` bound only holds if every value lies in
/// `[MIN_POSITION, MAX_POSITION]`; out-of-range inputs are not rejected here.
pub fn distance(a: &PositionSet, b: &PositionSet) -> f64 {
    let cmp = compare(a, b);
    if cmp.is_empty() {
        // No common ground: neither side is rewarded or penalized.
        return 0.0;
    }
    cmp.score()
}
