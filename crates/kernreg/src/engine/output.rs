//! Output types for kernel regression.
//!
//! ## Purpose
//!
//! This module defines `KernelRegressionResult`, which bundles the predictions
//! with the evaluation points, the bandwidth used, the cross-validation record,
//! and optional diagnostics.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x` and `y` have the same length and are positionally aligned.
//! * `cv_scores[fold]` has one entry per candidate.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::cv::{best_by_error, BandwidthScore};
use crate::evaluation::diagnostics::Diagnostics;

/// Which observations the predictions were produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMode {
    /// New points, predicted from the full dataset.
    OutOfSample,
    /// The sample itself, each point predicted from all the others.
    LeaveOneOut,
}

impl Display for PredictionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::OutOfSample => write!(f, "out-of-sample"),
            Self::LeaveOneOut => write!(f, "leave-one-out"),
        }
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Predictions together with the bandwidth selection record.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRegressionResult<T> {
    /// Evaluation points.
    pub x: Vec<T>,

    /// Predictions, aligned with `x`.
    pub y: Vec<T>,

    /// How the predictions were produced.
    pub mode: PredictionMode,

    /// Bandwidth used for prediction.
    pub bandwidth_used: T,

    /// Candidate bandwidths, in search order.
    pub bandwidths: Vec<T>,

    /// Winner of each fold.
    pub fold_winners: Vec<BandwidthScore<T>>,

    /// MSE of every candidate on every fold (`cv_scores[fold][candidate]`).
    pub cv_scores: Vec<Vec<T>>,

    /// Fit diagnostics (leave-one-out mode only).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> KernelRegressionResult<T> {
    /// Number of non-finite predictions.
    pub fn non_finite_count(&self) -> usize {
        self.y.iter().filter(|v| !v.is_finite()).count()
    }

    /// Error of the selected bandwidth on its winning fold.
    pub fn best_cv_score(&self) -> Option<T> {
        best_by_error(&self.fold_winners).map(|s| s.error)
    }

    /// Number of folds searched.
    pub fn num_folds(&self) -> usize {
        self.fold_winners.len()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for KernelRegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Mode:        {}", self.mode)?;
        writeln!(f, "  Bandwidth:   {}", self.bandwidth_used)?;
        writeln!(f, "  Folds:       {}", self.num_folds())?;
        if let Some(best) = self.best_cv_score() {
            writeln!(f, "  Best CV score: {}", best)?;
        }
        let non_finite = self.non_finite_count();
        if non_finite > 0 {
            writeln!(f, "  Non-finite:  {}", non_finite)?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Predictions:")?;
        writeln!(f, "{:>8} {:>12}", "X", "Y_pred")?;
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 if more than 20 points
        let n = self.x.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev = idx;
            writeln!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}
