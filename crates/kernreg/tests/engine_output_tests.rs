#![cfg(feature = "dev")]
//! Tests for the result type and its display format.

use kernreg::internals::engine::output::{KernelRegressionResult, PredictionMode};
use kernreg::internals::evaluation::cv::BandwidthScore;
use kernreg::internals::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Helper Functions
// ============================================================================

fn make_result(n: usize, y: Vec<f64>) -> KernelRegressionResult<f64> {
    KernelRegressionResult {
        x: (0..n).map(|i| i as f64).collect(),
        y,
        mode: PredictionMode::LeaveOneOut,
        bandwidth_used: 0.3,
        bandwidths: vec![0.1, 0.3],
        fold_winners: vec![BandwidthScore::new(0.3, 0.2), BandwidthScore::new(0.1, 0.4)],
        cv_scores: vec![vec![0.5, 0.2], vec![0.4, 0.6]],
        diagnostics: None,
    }
}

// ============================================================================
// Query Methods
// ============================================================================

/// Test non-finite counting.
#[test]
fn test_non_finite_count() {
    let result = make_result(4, vec![1.0, f64::NAN, f64::INFINITY, 2.0]);
    assert_eq!(result.non_finite_count(), 2);
}

/// Test the best fold score.
#[test]
fn test_best_cv_score() {
    let result = make_result(2, vec![1.0, 2.0]);
    assert_eq!(result.best_cv_score(), Some(0.2));
    assert_eq!(result.num_folds(), 2);
}

// ============================================================================
// Display
// ============================================================================

/// Test the summary and table of a short result.
#[test]
fn test_display_short() {
    let mut result = make_result(3, vec![0.5, 1.5, 2.5]);
    result.diagnostics = Some(Diagnostics::compute(&[0.5, 1.5, 3.0], &result.y));
    let text = format!("{}", result);

    assert!(text.contains("Data points: 3"));
    assert!(text.contains("Mode:        leave-one-out"));
    assert!(text.contains("Bandwidth:   0.3"));
    assert!(text.contains("Best CV score: 0.2"));
    assert!(text.contains("Kernel Regression Diagnostics:"));
    assert!(text.contains("Y_pred"));
    assert!(!text.contains("..."));
}

/// Test that long tables are elided.
#[test]
fn test_display_long_elides_rows() {
    let result = make_result(50, vec![1.0; 50]);
    let text = format!("{}", result);
    assert!(text.contains("..."));
    assert!(text.contains("49.00"));
    assert!(!text.contains("25.00"));
}

/// Test the mode labels.
#[test]
fn test_prediction_mode_display() {
    assert_eq!(PredictionMode::OutOfSample.to_string(), "out-of-sample");
    assert_eq!(PredictionMode::LeaveOneOut.to_string(), "leave-one-out");
}
