// Integration tests for the distance engine: worked examples, the
// missing/skipped equivalence, and seeded property checks.

use rand::{Rng, SeedableRng, rngs::StdRng};
use stancematch::{PositionSet, compare, distance, mock};

fn set(pairs: &[(u32, f64)]) -> PositionSet { PositionSet::from_pairs(pairs.iter().copied()) }

fn bloc(values: [f64; 15]) -> PositionSet {
    const IDS: [&str; 15] = ["3", "8", "16", "23", "38", "42", "63", "64", "71", "142", "222", "391", "411", "432", "442"];
    PositionSet::from_pairs(IDS.into_iter().zip(values))
}

fn voter(rng: &mut StdRng) -> PositionSet {
    bloc(std::array::from_fn(|_| mock::position(rng)))
}

const EXPECTED: f64 = (8.0 - 3.0) / 8.0;

#[test]
fn left_not_answered() {
    let a = set(&[(0, -2.0), (1, 1.0), (2, 2.0)]);
    let b = set(&[(0, 1.0), (1, 1.0), (2, 0.0)]);
    assert_eq!(distance(&a, &b), EXPECTED);
}

#[test]
fn left_missing() {
    let a = set(&[(0, -2.0), (1, 1.0), (2, 2.0)]);
    let b = set(&[(0, 1.0), (1, 1.0)]);
    assert_eq!(distance(&a, &b), EXPECTED);
}

#[test]
fn right_not_answered() {
    let a = set(&[(0, 1.0), (1, 1.0), (2, 0.0)]);
    let b = set(&[(0, -2.0), (1, 1.0), (2, 2.0)]);
    assert_eq!(distance(&a, &b), EXPECTED);
}

#[test]
fn right_missing() {
    let a = set(&[(0, 1.0), (1, 1.0)]);
    let b = set(&[(0, -2.0), (1, 1.0), (2, 2.0)]);
    assert_eq!(distance(&a, &b), EXPECTED);
}

#[test]
fn both_not_answered() {
    let a = set(&[(0, 1.0), (1, 1.0), (2, 0.0), (3, -1.0)]);
    let b = set(&[(0, -2.0), (1, 1.0), (2, 2.0), (3, 0.0)]);
    assert_eq!(distance(&a, &b), EXPECTED);
}

#[test]
fn both_missing() {
    let a = set(&[(0, 1.0), (1, 1.0), (3, -1.0)]);
    let b = set(&[(0, -2.0), (1, 1.0), (2, 2.0)]);
    assert_eq!(distance(&a, &b), EXPECTED);
}

#[test]
fn readme_example() {
    let a = set(&[(0, 1.0), (1, -1.0)]);
    let b = set(&[(0, 0.0), (1, -2.0)]);
    assert_eq!(distance(&a, &b), 0.75);
}

#[test]
fn all_zero_sides_score_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    let zeros = mock::positions_with(2, |_| 0.0);
    let answered = mock::answered_positions(2, &mut rng);

    assert_eq!(distance(&zeros, &answered), 0.0);
    assert_eq!(distance(&answered, &zeros), 0.0);
    assert_eq!(distance(&zeros, &zeros), 0.0);
    assert_eq!(distance(&answered, &PositionSet::new()), 0.0);
    assert_eq!(distance(&PositionSet::new(), &answered), 0.0);
}

#[test]
fn symmetric_on_bloc_examples() {
    let left = bloc([-0.25, -0.25, -0.25, 0.25, -0.25, -0.5, -0.5, 0.25, -0.25, -0.25, -0.25, 0.25, -0.5, -0.5, 0.25]);
    let centre = bloc([0.33, -0.66, 0.33, -0.66, -0.33, 0.66, -0.66, 0.33, 0.33, 0.66, 0.33, -0.33, -0.66, 0.33, 0.66]);
    let right = bloc([1.0, 1.0, -1.0, 1.0, -0.5, 1.0, -0.5, -0.5, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, -1.0]);

    let mut rng = StdRng::seed_from_u64(2019);
    for party in [&left, &centre, &right] {
        for _ in 0..20 {
            let v = voter(&mut rng);
            assert_eq!(distance(party, &v), distance(&v, party));
        }
    }
}

#[test]
fn zeros_are_indistinguishable_from_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 0..30 {
        let zeros = mock::positions_with(n, |_| 0.0);
        assert_eq!(distance(&zeros, &PositionSet::new()), 0.0);
        let other = mock::positions(n + 5, &mut rng);
        assert_eq!(distance(&zeros, &other), 0.0);
    }
}

#[test]
fn property_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let (n, m) = (rng.random_range(11..40), rng.random_range(11..40));
        let a = mock::positions(n, &mut rng);
        let b = mock::positions(m, &mut rng);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(compare(&a, &b), compare(&b, &a));
    }
}

#[test]
fn property_range_bound_equal_length() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..500 {
        let n = rng.random_range(0..30);
        let d = distance(&mock::positions(n, &mut rng), &mock::positions(n, &mut rng));
        assert!((0.0..=1.0).contains(&d), "distance {d} out of range");
    }
}

#[test]
fn property_range_bound_uneven_length() {
    let mut rng = StdRng::seed_from_u64(44);
    for _ in 0..500 {
        let n = rng.random_range(0..30);
        let m = n + rng.random_range(1..10);
        let d = distance(&mock::positions(n, &mut rng), &mock::positions(m, &mut rng));
        assert!((0.0..=1.0).contains(&d), "distance {d} out of range");
    }
}

#[test]
fn hand_computed_without_skips() {
    // |2 - -2| + |-1 - -2| = 5 over a worst case of 2 * 4.
    let a = set(&[(0, 2.0), (1, -1.0)]);
    let b = set(&[(0, -2.0), (1, -2.0)]);
    assert_eq!(distance(&a, &b), (8.0 - 5.0) / 8.0);
    assert_eq!(compare(&a, &b).disagreement(), 5.0 / 8.0);

    // |1 - 1| + |2 - -1| + |-1 - -2| + |0.5 - 1.5| = 5 over 4 * 4.
    let a = set(&[(0, 1.0), (1, 2.0), (2, -1.0), (3, 0.5)]);
    let b = set(&[(0, 1.0), (1, -1.0), (2, -2.0), (3, 1.5)]);
    assert_eq!(distance(&a, &b), (16.0 - 5.0) / 16.0);
}

#[test]
fn property_matches_mean_difference_without_skips() {
    let mut rng = StdRng::seed_from_u64(45);
    for _ in 0..500 {
        let n = rng.random_range(1..30);
        let a = mock::answered_positions(n, &mut rng);
        let b = mock::answered_positions(n, &mut rng);

        let mean_diff = a.iter()
            .map(|(id, x)| (x - b.value(id)).abs())
            .sum::<f64>() / n as f64;
        let expected = 1.0 - mean_diff / 4.0;
        assert!((distance(&a, &b) - expected).abs() < 1e-12);
        assert_eq!(compare(&a, &b).comparable(), n);
    }
}

#[test]
fn out_of_range_input_can_leave_unit_interval() {
    let a = set(&[(0, 10.0)]);
    let b = set(&[(0, -10.0)]);
    assert!(distance(&a, &b) < 0.0);
}
