#![cfg(feature = "dev")]
//! Tests for cross-validated bandwidth selection.
//!
//! These tests verify:
//! - Mean squared error and its error cases
//! - Stable-minimum selection (`best_by_error`)
//! - Per-fold evaluation and the full k-fold search
//!
//! ## Test Organization
//!
//! 1. **Error Metric** - MSE values and guards
//! 2. **Selection** - Minimum, ties, NaN handling
//! 3. **K-Fold Search** - Fold outcomes, optimal bandwidth, determinism

use approx::assert_relative_eq;

use kernreg::internals::evaluation::cv::{
    BandwidthScore, CVOutcome, FoldOutcome, KFoldSearch, best_by_error, default_bandwidths,
    mean_squared_error,
};
use kernreg::internals::primitives::buffer::CVBuffer;
use kernreg::internals::primitives::dataset::Dataset;
use kernreg::internals::primitives::errors::KernregError;

// ============================================================================
// Helper Functions
// ============================================================================

fn identity_dataset(folds: usize) -> Dataset<f64> {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    Dataset::new(x.clone(), x, folds).unwrap()
}

fn score(bandwidth: f64, error: f64) -> BandwidthScore<f64> {
    BandwidthScore::new(bandwidth, error)
}

// ============================================================================
// Error Metric
// ============================================================================

/// Test the MSE closed form.
#[test]
fn test_mse_value() {
    let mse = mean_squared_error(&[1.0, 2.0, 4.0], &[1.0, 3.0, 2.0]).unwrap();
    assert_relative_eq!(mse, 5.0 / 3.0);
}

/// Test that MSE is zero exactly when the batches are equal.
#[test]
fn test_mse_zero_iff_equal() {
    let a = [0.5, -2.0, 3.25];
    assert_eq!(mean_squared_error(&a, &a).unwrap(), 0.0);
    assert!(mean_squared_error(&a, &[0.5, -2.0, 3.0]).unwrap() > 0.0);
}

/// Test non-negativity over assorted batches.
#[test]
fn test_mse_non_negative() {
    let batches: [(&[f64], &[f64]); 3] = [
        (&[1.0], &[-1.0]),
        (&[-5.0, 5.0], &[5.0, -5.0]),
        (&[1e-9, 2e-9], &[0.0, 0.0]),
    ];
    for (p, a) in batches {
        assert!(mean_squared_error(p, a).unwrap() >= 0.0);
    }
}

/// Test the empty batch error.
#[test]
fn test_mse_empty_batch() {
    let empty: [f64; 0] = [];
    assert_eq!(
        mean_squared_error(&empty, &empty),
        Err(KernregError::EmptyBatch)
    );
}

/// Test mismatched batch lengths.
#[test]
fn test_mse_mismatched_batch() {
    assert_eq!(
        mean_squared_error(&[1.0, 2.0], &[1.0]),
        Err(KernregError::MismatchedBatch {
            predicted: 2,
            actual: 1
        })
    );
}

/// Test that a non-finite prediction propagates into the error.
#[test]
fn test_mse_propagates_nan() {
    assert!(mean_squared_error(&[f64::NAN, 1.0], &[1.0, 1.0]).unwrap().is_nan());
}

// ============================================================================
// Selection
// ============================================================================

/// Test that the minimum error wins.
#[test]
fn test_best_by_error_minimum() {
    let scores = [score(0.1, 3.0), score(0.2, 0.5), score(0.3, 1.0)];
    assert_eq!(best_by_error(&scores), Some(score(0.2, 0.5)));
}

/// Test that the result is no larger than any error.
#[test]
fn test_best_by_error_is_lower_bound() {
    let scores: Vec<_> = (0..25)
        .map(|i| score(i as f64, ((i * 7919) % 31) as f64))
        .collect();
    let best = best_by_error(&scores).unwrap();
    assert!(scores.iter().all(|s| best.error <= s.error));
}

/// Test that ties keep the first occurrence.
#[test]
fn test_best_by_error_ties_first() {
    let scores = [score(0.4, 1.0), score(0.1, 0.2), score(0.3, 0.2)];
    assert_eq!(best_by_error(&scores).unwrap().bandwidth, 0.1);
}

/// Test that NaN errors never win over finite ones.
#[test]
fn test_best_by_error_skips_nan() {
    let scores = [score(0.1, f64::NAN), score(0.2, 5.0), score(0.3, f64::NAN)];
    assert_eq!(best_by_error(&scores).unwrap().bandwidth, 0.2);
}

/// Test the all-NaN case.
#[test]
fn test_best_by_error_all_nan() {
    let scores = [score(0.1, f64::NAN), score(0.2, f64::NAN)];
    assert_eq!(best_by_error(&scores).unwrap().bandwidth, 0.1);
}

/// Test the empty case.
#[test]
fn test_best_by_error_empty() {
    assert_eq!(best_by_error::<f64>(&[]), None);
}

/// Test that an empty fold outcome is rejected.
#[test]
fn test_fold_outcome_requires_scores() {
    assert_eq!(
        FoldOutcome::<f64>::from_scores(0, 3, vec![]),
        Err(KernregError::EmptyBandwidths)
    );
}

// ============================================================================
// Default Candidates
// ============================================================================

/// Test the default candidate grid.
#[test]
fn test_default_bandwidths() {
    let bw: Vec<f64> = default_bandwidths();
    assert_eq!(bw.len(), 20);
    assert_relative_eq!(bw[0], 0.1);
    assert_relative_eq!(bw[9], 1.0);
    assert_relative_eq!(bw[19], 2.0);
    assert!(bw.windows(2).all(|w| w[0] < w[1]));
}

// ============================================================================
// K-Fold Search
// ============================================================================

/// Test a single fold evaluation.
#[test]
fn test_evaluate_fold() {
    let ds = identity_dataset(5);
    let folds = ds.partition(100).unwrap();
    let bandwidths = [0.1, 1.0, 2.0];
    let mut buffer = CVBuffer::new();

    let outcome = KFoldSearch::evaluate_fold(&ds, &folds, 0, &bandwidths, &mut buffer).unwrap();

    assert_eq!(outcome.fold, 0);
    assert_eq!(outcome.size, 2);
    assert_eq!(outcome.scores.len(), 3);
    for (s, &h) in outcome.scores.iter().zip(bandwidths.iter()) {
        assert_eq!(s.bandwidth, h);
        assert!(s.error >= 0.0);
    }
    assert_eq!(Some(outcome.best), best_by_error(&outcome.scores));
}

/// Test the full search on the identity line.
#[test]
fn test_search_identity_line() {
    let ds = identity_dataset(5);
    let folds = ds.partition(100).unwrap();
    let bandwidths: Vec<f64> = default_bandwidths();

    let cv = KFoldSearch::run(&ds, &folds, &bandwidths).unwrap();

    assert_eq!(cv.folds.len(), 5);
    assert!(bandwidths.contains(&cv.optimal.bandwidth));
    assert_relative_eq!(cv.optimal.bandwidth, 0.1);
    assert!(cv.optimal.error < 1e-10);

    let winners = cv.fold_winners();
    assert!(winners.iter().all(|w| cv.optimal.error <= w.error));

    let grid = cv.score_grid();
    assert_eq!(grid.len(), 5);
    assert!(grid.iter().all(|row| row.len() == 20));
}

/// Test that the optimum is the first fold winner on ties.
#[test]
fn test_select_optimal_tie_prefers_first_fold() {
    let outcomes = vec![
        FoldOutcome::from_scores(0, 2, vec![score(0.5, 1.0), score(0.7, 0.25)]).unwrap(),
        FoldOutcome::from_scores(1, 2, vec![score(0.3, 0.25)]).unwrap(),
    ];
    let cv = CVOutcome::from_folds(outcomes).unwrap();
    assert_eq!(cv.optimal, score(0.7, 0.25));
}

/// Test determinism of the search.
#[test]
fn test_search_deterministic() {
    let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 2.0).sin()).collect();
    let ds = Dataset::new(x, y, 4).unwrap();
    let bandwidths: Vec<f64> = default_bandwidths();

    let a = KFoldSearch::run(&ds, &ds.partition(9).unwrap(), &bandwidths).unwrap();
    let b = KFoldSearch::run(&ds, &ds.partition(9).unwrap(), &bandwidths).unwrap();
    assert_eq!(a, b);
}
