#![cfg(feature = "dev")]
//! Tests for Nadaraya-Watson prediction.
//!
//! These tests verify:
//! - Weighted-mean prediction at single points and in batches
//! - Leave-one-out prediction
//! - Behavior at extreme bandwidths, including zero total weight
//!
//! ## Test Organization
//!
//! 1. **Point Prediction** - Closed-form checks
//! 2. **Leave-One-Out** - Identical x values, exclusion of the held-out point
//! 3. **Extreme Bandwidths** - Convergence to the mean, non-finite output

use approx::{assert_abs_diff_eq, assert_relative_eq};

use kernreg::internals::algorithms::regression::NadarayaWatson;

// ============================================================================
// Point Prediction
// ============================================================================

/// Test prediction at a training point between two neighbours.
#[test]
fn test_predict_point_symmetric_neighbours() {
    let train_x = [0.0, 2.0];
    let train_y = [1.0, 3.0];
    let pred = NadarayaWatson::predict_point(1.0, &train_x, &train_y, 1.0);
    assert_relative_eq!(pred, 2.0, epsilon = 1e-12);
}

/// Test that prediction is a weighted mean.
#[test]
fn test_predict_point_weighted_mean() {
    let train_x = [0.0, 1.0];
    let train_y = [10.0, 20.0];
    let w1 = (-1.0f64).exp();
    let expected = (10.0 + w1 * 20.0) / (1.0 + w1);
    let pred = NadarayaWatson::predict_point(0.0, &train_x, &train_y, 1.0);
    assert_relative_eq!(pred, expected, epsilon = 1e-12);
}

/// Test that a constant response is reproduced exactly.
#[test]
fn test_predict_constant_response() {
    let train_x = [0.0, 0.3, 1.1, 2.0, 5.0];
    let train_y = [4.0; 5];
    let preds = NadarayaWatson::predict(&[-1.0, 0.5, 3.0], &train_x, &train_y, 0.7);
    for p in preds {
        assert_relative_eq!(p, 4.0, epsilon = 1e-12);
    }
}

/// Test output alignment with evaluation points.
#[test]
fn test_predict_alignment() {
    let train_x = [0.0, 10.0];
    let train_y = [0.0, 100.0];
    let preds = NadarayaWatson::predict(&[10.0, 0.0], &train_x, &train_y, 1.0);
    assert_eq!(preds.len(), 2);
    assert_relative_eq!(preds[0], 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(preds[1], 0.0, epsilon = 1e-9);
}

/// Test empty evaluation input.
#[test]
fn test_predict_empty_eval() {
    let preds = NadarayaWatson::predict(&[], &[1.0, 2.0], &[1.0, 2.0], 1.0);
    assert!(preds.is_empty());
}

// ============================================================================
// Leave-One-Out
// ============================================================================

/// Test leave-one-out with identical x values.
///
/// Every weight is 1, so each prediction is the mean of the other responses.
#[test]
fn test_leave_one_out_identical_x() {
    let x = [0.0, 0.0, 0.0, 0.0];
    let y = [1.0, 2.0, 3.0, 4.0];
    let preds = NadarayaWatson::leave_one_out(&x, &y, 0.5);

    let expected = [3.0, 8.0 / 3.0, 7.0 / 3.0, 2.0];
    for (p, e) in preds.iter().zip(expected.iter()) {
        assert_relative_eq!(*p, *e, epsilon = 1e-12);
    }
}

/// Test that the held-out point is excluded.
#[test]
fn test_leave_one_out_excludes_self() {
    let x = [0.0, 0.0, 50.0];
    let y = [1.0, 3.0, 1000.0];
    // Point 0 sees point 1 with weight 1 and point 2 with weight ~0
    let pred = NadarayaWatson::predict_excluding(&x, &y, 0, 1.0);
    assert_relative_eq!(pred, 3.0, epsilon = 1e-12);
}

/// Test that batch leave-one-out matches point-wise exclusion.
#[test]
fn test_leave_one_out_matches_excluding() {
    let x = [0.1, 0.4, 0.5, 1.3, 2.2];
    let y = [1.0, -1.0, 0.5, 2.0, 3.0];
    let preds = NadarayaWatson::leave_one_out(&x, &y, 0.3);
    for (i, p) in preds.iter().enumerate() {
        assert_eq!(*p, NadarayaWatson::predict_excluding(&x, &y, i, 0.3));
    }
}

// ============================================================================
// Extreme Bandwidths
// ============================================================================

/// Test that a far point approaches the mean as the bandwidth grows.
#[test]
fn test_far_point_approaches_mean() {
    let x = [0.0f64, 1.0, 2.0, 3.0];
    let y = [1.0f64, 2.0, 3.0, 4.0];
    let mean: f64 = 2.5;

    let mut prev_gap = f64::INFINITY;
    for &h in &[1e3, 1e4, 1e5, 1e6, 1e8] {
        let pred = NadarayaWatson::predict_point(100.0, &x, &y, h);
        let gap = (pred - mean).abs();
        assert!(gap < prev_gap, "gap must shrink as h grows (h={h})");
        prev_gap = gap;
    }
    assert_abs_diff_eq!(
        NadarayaWatson::predict_point(100.0, &x, &y, 1e8),
        mean,
        epsilon = 1e-4
    );
}

/// Test that zero total weight gives a non-finite prediction.
#[test]
fn test_zero_total_weight_is_non_finite() {
    let x = [0.0f64, 1.0, 2.0, 3.0];
    let y = [1.0f64, 2.0, 3.0, 4.0];
    let preds = NadarayaWatson::predict(&[1.5, 100.0], &x, &y, 0.1);
    assert!(preds[0].is_finite());
    assert!(!preds[1].is_finite());
}
