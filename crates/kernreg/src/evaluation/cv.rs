//! Cross-validation for kernel bandwidth selection.
//!
//! ## Purpose
//!
//! This module selects the Gaussian kernel bandwidth by exhaustive k-fold
//! grid search: every candidate is scored on every fold, each fold keeps its
//! best candidate, and the best fold winner becomes the optimal bandwidth.
//!
//! ## Design notes
//!
//! * **Stable Minimum**: Ties resolve to the first occurrence, so the result
//!   does not depend on how scores were computed, only on their order.
//! * **Map-Reduce Shape**: `evaluate_fold` is independent per fold and
//!   `select_optimal` is the reduction, so parallel callers reuse both.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Fold Winner**: The `(bandwidth, mse)` pair with the smallest error within a fold.
//! * **Optimal Bandwidth**: The fold winner with the smallest error across folds.
//!
//! ## Invariants
//!
//! * Training and evaluation sets are disjoint in each fold.
//! * The optimal bandwidth is always one of the candidates.
//! * NaN errors never win over a finite error.
//!
//! ## Non-goals
//!
//! * This module does not average errors across folds.
//! * This module does not stop early.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::NadarayaWatson;
use crate::primitives::buffer::CVBuffer;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::KernregError;
use crate::primitives::partition::FoldAssignment;

// ============================================================================
// Candidate Bandwidths
// ============================================================================

/// Number of default bandwidth candidates.
pub const DEFAULT_BANDWIDTH_COUNT: usize = 20;

/// Spacing between default bandwidth candidates.
pub const DEFAULT_BANDWIDTH_STEP: f64 = 0.1;

/// Default candidate set: `0.1, 0.2, ..., 2.0`.
pub fn default_bandwidths<T: Float>() -> Vec<T> {
    (0..DEFAULT_BANDWIDTH_COUNT)
        .filter_map(|i| T::from((i + 1) as f64 * DEFAULT_BANDWIDTH_STEP))
        .collect()
}

// ============================================================================
// Scores
// ============================================================================

/// A bandwidth together with the error it achieved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandwidthScore<T> {
    /// Candidate bandwidth.
    pub bandwidth: T,
    /// Mean squared error achieved with `bandwidth`.
    pub error: T,
}

impl<T> BandwidthScore<T> {
    /// Pair a bandwidth with its error.
    pub fn new(bandwidth: T, error: T) -> Self {
        Self { bandwidth, error }
    }
}

/// Mean squared error between predicted and actual values.
pub fn mean_squared_error<T: Float>(predicted: &[T], actual: &[T]) -> Result<T, KernregError> {
    let n = actual.len();
    if n == 0 {
        return Err(KernregError::EmptyBatch);
    }
    if predicted.len() != n {
        return Err(KernregError::MismatchedBatch {
            predicted: predicted.len(),
            actual: n,
        });
    }

    let sum = predicted
        .iter()
        .zip(actual.iter())
        .fold(T::zero(), |acc, (&p, &a)| {
            let diff = p - a;
            acc + diff * diff
        });

    Ok(sum / T::from(n).unwrap_or_else(T::one))
}

/// The score with the smallest error, first occurrence on ties.
///
/// A NaN error is treated as larger than any other error.
pub fn best_by_error<T: Float>(scores: &[BandwidthScore<T>]) -> Option<BandwidthScore<T>> {
    let mut iter = scores.iter().copied();
    let mut best = iter.next()?;
    for candidate in iter {
        if candidate.error < best.error || (best.error.is_nan() && !candidate.error.is_nan()) {
            best = candidate;
        }
    }
    Some(best)
}

// ============================================================================
// Outcomes
// ============================================================================

/// Scores of every candidate on one fold.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldOutcome<T> {
    /// Fold index.
    pub fold: usize,
    /// Number of evaluation points in the fold.
    pub size: usize,
    /// One score per candidate, in candidate order.
    pub scores: Vec<BandwidthScore<T>>,
    /// Best candidate on this fold.
    pub best: BandwidthScore<T>,
}

impl<T: Float> FoldOutcome<T> {
    /// Build a fold outcome, selecting its winner.
    pub fn from_scores(
        fold: usize,
        size: usize,
        scores: Vec<BandwidthScore<T>>,
    ) -> Result<Self, KernregError> {
        let best = best_by_error(&scores).ok_or(KernregError::EmptyBandwidths)?;
        Ok(Self {
            fold,
            size,
            scores,
            best,
        })
    }
}

/// Result of a complete k-fold search.
#[derive(Debug, Clone, PartialEq)]
pub struct CVOutcome<T> {
    /// Winning bandwidth and its fold error.
    pub optimal: BandwidthScore<T>,
    /// Per-fold results, in fold order.
    pub folds: Vec<FoldOutcome<T>>,
}

impl<T: Float> CVOutcome<T> {
    /// Reduce fold outcomes to the optimal bandwidth.
    pub fn from_folds(folds: Vec<FoldOutcome<T>>) -> Result<Self, KernregError> {
        let optimal = KFoldSearch::select_optimal(&folds)?;
        Ok(Self { optimal, folds })
    }

    /// Winner of each fold, in fold order.
    pub fn fold_winners(&self) -> Vec<BandwidthScore<T>> {
        self.folds.iter().map(|f| f.best).collect()
    }

    /// Error of every candidate on every fold (`grid[fold][candidate]`).
    pub fn score_grid(&self) -> Vec<Vec<T>> {
        self.folds
            .iter()
            .map(|f| f.scores.iter().map(|s| s.error).collect())
            .collect()
    }
}

// ============================================================================
// K-Fold Search
// ============================================================================

/// Exhaustive k-fold grid search over bandwidth candidates.
pub struct KFoldSearch;

impl KFoldSearch {
    /// Score one candidate against the fold currently loaded in `buffer`.
    pub fn score_candidate<T: Float>(
        buffer: &mut CVBuffer<T>,
        h: T,
    ) -> Result<BandwidthScore<T>, KernregError> {
        NadarayaWatson::predict_into(
            &buffer.test_x,
            &buffer.train_x,
            &buffer.train_y,
            h,
            &mut buffer.predictions,
        );
        let error = mean_squared_error(&buffer.predictions, &buffer.test_y)?;
        Ok(BandwidthScore::new(h, error))
    }

    /// Score every candidate on fold `fold`.
    pub fn evaluate_fold<T: Float>(
        dataset: &Dataset<T>,
        folds: &FoldAssignment,
        fold: usize,
        bandwidths: &[T],
        buffer: &mut CVBuffer<T>,
    ) -> Result<FoldOutcome<T>, KernregError> {
        buffer.load_fold(dataset.x(), dataset.y(), folds, fold);

        let mut scores = Vec::with_capacity(bandwidths.len());
        for &h in bandwidths {
            scores.push(Self::score_candidate(buffer, h)?);
        }

        let outcome = FoldOutcome::from_scores(fold, buffer.test_x.len(), scores)?;
        log::debug!(
            "fold {}: best bandwidth {} (mse {})",
            fold,
            outcome.best.bandwidth.to_f64().unwrap_or(f64::NAN),
            outcome.best.error.to_f64().unwrap_or(f64::NAN)
        );
        Ok(outcome)
    }

    /// The fold winner with the smallest error.
    pub fn select_optimal<T: Float>(
        folds: &[FoldOutcome<T>],
    ) -> Result<BandwidthScore<T>, KernregError> {
        let winners: Vec<BandwidthScore<T>> = folds.iter().map(|f| f.best).collect();
        best_by_error(&winners).ok_or(KernregError::EmptyBandwidths)
    }

    /// Run the full search sequentially.
    pub fn run<T: Float>(
        dataset: &Dataset<T>,
        folds: &FoldAssignment,
        bandwidths: &[T],
    ) -> Result<CVOutcome<T>, KernregError> {
        let mut buffer = CVBuffer::new();
        let mut outcomes = Vec::with_capacity(folds.len());
        for fold in 0..folds.len() {
            outcomes.push(Self::evaluate_fold(
                dataset,
                folds,
                fold,
                bandwidths,
                &mut buffer,
            )?);
        }
        CVOutcome::from_folds(outcomes)
    }
}
