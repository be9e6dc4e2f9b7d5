//! Property-based tests for the sort's global guarantees

use proptest::prelude::*;
use shearsort::{sort_matrix, Matrix};

/// Valid (n, procs) shapes kept small enough for exhaustive shrinking.
fn shapes() -> impl Strategy<Value = (usize, usize)> {
    prop_oneof![
        Just((2usize, 1usize)),
        Just((2, 2)),
        Just((4, 2)),
        Just((4, 4)),
        Just((6, 2)),
        Just((6, 3)),
        Just((8, 2)),
        Just((8, 4)),
    ]
}

fn matrix_for(n: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(-1.0e6..1.0e6f64, n * n).prop_map(move |values| Matrix::new(n, values))
}

proptest! {
    // Each case spins up a fresh worker pool, so keep the run count
    // modest.
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_snake_order_and_permutation(
        (n, procs) in shapes(),
        seed in any::<u64>(),
    ) {
        // Derive the matrix from the seed so the shape and contents
        // shrink independently.
        let mut state = seed | 1;
        let values: Vec<f64> = (0..n * n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                ((state % 2_000_001) as i64 - 1_000_000) as f64 / 100.0
            })
            .collect();
        let matrix = Matrix::new(n, values);

        let mut expected = matrix.values.clone();
        expected.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());

        let sorted = sort_matrix(matrix, procs).unwrap();

        // Full order: the snake traversal is the sorted sequence.
        let snake: Vec<f64> = sorted.boustrophedon().collect();
        prop_assert_eq!(&snake, &expected);
        // Permutation: implied by equality with the sorted multiset.
        prop_assert!(sorted.is_boustrophedon_sorted());
    }

    #[test]
    fn prop_idempotent((n, procs) in shapes(), values in any::<u64>()) {
        let mut state = values | 1;
        let data: Vec<f64> = (0..n * n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 1000) as f64
            })
            .collect();
        let once = sort_matrix(Matrix::new(n, data), procs).unwrap();
        let twice = sort_matrix(once.clone(), procs).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_uniform_matrices_untouched((n, procs) in shapes(), value in -100.0..100.0f64) {
        let matrix = Matrix::new(n, vec![value; n * n]);
        let sorted = sort_matrix(matrix.clone(), procs).unwrap();
        prop_assert_eq!(sorted, matrix);
    }

    #[test]
    fn prop_small_generated_matrices(matrix in (2usize..=4).prop_flat_map(|k| matrix_for(2 * k))) {
        // n is even, so procs = 2 always divides it.
        let mut expected = matrix.values.clone();
        expected.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        let sorted = sort_matrix(matrix, 2).unwrap();
        let snake: Vec<f64> = sorted.boustrophedon().collect();
        prop_assert_eq!(snake, expected);
    }
}
