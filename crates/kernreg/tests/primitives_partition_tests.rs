#![cfg(feature = "dev")]
//! Tests for seeded fold partitioning.
//!
//! These tests verify that fold assignments:
//! - Form a partition of `0..n` (no index lost or repeated)
//! - Have sizes differing by at most one, larger folds first
//! - Depend only on `(n, k, seed)`
//!
//! ## Test Organization
//!
//! 1. **Partition Properties** - Exhaustive small grids, sampled large grids
//! 2. **Determinism** - Seed reproducibility
//! 3. **Validation** - Invalid fold counts

use kernreg::internals::primitives::errors::KernregError;
use kernreg::internals::primitives::partition::{DEFAULT_SEED, FoldAssignment};

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_valid_partition(folds: &FoldAssignment, n: usize, k: usize) {
    assert_eq!(folds.len(), k, "n={n}, k={k}: wrong fold count");

    let mut seen = vec![false; n];
    for fold in folds.iter() {
        for &idx in fold {
            assert!(idx < n, "n={n}, k={k}: index {idx} out of range");
            assert!(!seen[idx], "n={n}, k={k}: index {idx} repeated");
            seen[idx] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "n={n}, k={k}: index missing");

    let sizes = folds.sizes();
    let max = *sizes.iter().max().unwrap();
    let min = *sizes.iter().min().unwrap();
    assert!(max - min <= 1, "n={n}, k={k}: unbalanced sizes {sizes:?}");
    assert!(
        sizes.windows(2).all(|w| w[0] >= w[1]),
        "n={n}, k={k}: larger folds must come first, got {sizes:?}"
    );
}

// ============================================================================
// Partition Properties
// ============================================================================

/// Test every fold count for small datasets.
///
/// Verifies the partition invariants for all `2 <= k <= n <= 60`.
#[test]
fn test_partition_exhaustive_small() {
    for n in 2..=60 {
        for k in 2..=n {
            let folds = FoldAssignment::partition(n, k, DEFAULT_SEED).unwrap();
            assert_valid_partition(&folds, n, k);
        }
    }
}

/// Test sampled fold counts for larger datasets.
///
/// Verifies the partition invariants for `n` up to 1000.
#[test]
fn test_partition_sampled_large() {
    for n in [61, 97, 128, 250, 499, 500, 777, 1000] {
        for k in [2, 3, 5, 7, 10, 31, n / 2, n - 1, n] {
            let folds = FoldAssignment::partition(n, k, 42).unwrap();
            assert_valid_partition(&folds, n, k);
        }
    }
}

/// Test the remainder placement.
///
/// Verifies that 10 points in 3 folds split as 4, 3, 3.
#[test]
fn test_partition_remainder_first() {
    let folds = FoldAssignment::partition(10, 3, DEFAULT_SEED).unwrap();
    assert_eq!(folds.sizes(), vec![4, 3, 3]);
    assert_eq!(folds.total(), 10);
}

/// Test the exact assignment for the default seed.
///
/// Pins the generator so fold contents stay stable across releases.
#[test]
fn test_partition_default_seed_contents() {
    let folds = FoldAssignment::partition(10, 3, DEFAULT_SEED).unwrap();
    assert_eq!(folds.fold(0), &[1, 8, 3, 4]);
    assert_eq!(folds.fold(1), &[6, 7, 2]);
    assert_eq!(folds.fold(2), &[9, 0, 5]);
}

/// Test the training indices of a fold.
///
/// Verifies that training indices are every other fold, in fold order.
#[test]
fn test_training_indices() {
    let folds = FoldAssignment::partition(10, 3, DEFAULT_SEED).unwrap();
    assert_eq!(folds.training_indices(1), vec![1, 8, 3, 4, 9, 0, 5]);

    for i in 0..folds.len() {
        let train = folds.training_indices(i);
        assert_eq!(train.len() + folds.fold(i).len(), 10);
        assert!(train.iter().all(|idx| !folds.fold(i).contains(idx)));
    }
}

/// Test leave-one-out style partitioning.
///
/// Verifies that `k == n` yields singleton folds.
#[test]
fn test_partition_singletons() {
    let folds = FoldAssignment::partition(7, 7, 3).unwrap();
    assert!(folds.iter().all(|f| f.len() == 1));
}

// ============================================================================
// Determinism
// ============================================================================

/// Test reproducibility for a fixed seed.
///
/// Verifies that the same `(n, k, seed)` gives the same folds.
#[test]
fn test_partition_reproducible() {
    let a = FoldAssignment::partition(100, 10, 2024).unwrap();
    let b = FoldAssignment::partition(100, 10, 2024).unwrap();
    assert_eq!(a, b);
}

/// Test that the seed matters.
///
/// Verifies that different seeds give different assignments.
#[test]
fn test_partition_seed_changes_assignment() {
    let a = FoldAssignment::partition(100, 10, 1).unwrap();
    let b = FoldAssignment::partition(100, 10, 2).unwrap();
    assert_ne!(a, b);
}

// ============================================================================
// Validation
// ============================================================================

/// Test rejection of too few folds.
#[test]
fn test_partition_rejects_one_fold() {
    let res = FoldAssignment::partition(10, 1, DEFAULT_SEED);
    assert_eq!(
        res,
        Err(KernregError::InvalidFoldCount {
            folds: 1,
            points: 10
        })
    );
}

/// Test rejection of more folds than points.
#[test]
fn test_partition_rejects_too_many_folds() {
    let res = FoldAssignment::partition(4, 5, DEFAULT_SEED);
    assert!(matches!(
        res,
        Err(KernregError::InvalidFoldCount {
            folds: 5,
            points: 4
        })
    ));
}
