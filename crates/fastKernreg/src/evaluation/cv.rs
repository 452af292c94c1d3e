//! Parallel cross-validation for kernel bandwidth selection.
//!
//! ## Purpose
//!
//! This module provides the parallel k-fold search injected into the
//! `kernreg` regressor through the `CVPassFn` hook. Folds run concurrently,
//! and within each fold the candidates run concurrently.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` over folds (outer) and candidates (inner).
//! * **Buffer Reuse**: One `CVBuffer` per worker via `map_init`.
//! * **Consistency**: Results are collected in index order and reduced with
//!   `kernreg`'s `best_by_error`, so the selection matches the sequential search.
//!
//! ## Invariants
//!
//! * `outcome.folds[i]` describes fold `i`, and `scores[j]` candidate `j`.
//! * Each candidate error is computed exactly as in the sequential search.
//!
//! ## Non-goals
//!
//! * This module does not implement fold partitioning (delegated to `kernreg`).
//! * This module does not cancel in-flight work on error.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use num_traits::Float;

// Export dependencies from kernreg crate
#[cfg(feature = "cpu")]
use kernreg::internals::algorithms::regression::NadarayaWatson;
#[cfg(feature = "cpu")]
use kernreg::internals::evaluation::cv::{
    mean_squared_error, BandwidthScore, CVOutcome, FoldOutcome,
};
#[cfg(feature = "cpu")]
use kernreg::internals::primitives::buffer::CVBuffer;
#[cfg(feature = "cpu")]
use kernreg::internals::primitives::dataset::Dataset;
#[cfg(feature = "cpu")]
use kernreg::internals::primitives::errors::KernregError;
#[cfg(feature = "cpu")]
use kernreg::internals::primitives::partition::FoldAssignment;

/// Score every candidate on every fold in parallel and select the bandwidth.
#[cfg(feature = "cpu")]
pub fn cv_pass_parallel<T>(
    dataset: &Dataset<T>,
    folds: &FoldAssignment,
    bandwidths: &[T],
) -> Result<CVOutcome<T>, KernregError>
where
    T: Float + Send + Sync,
{
    let outcomes: Vec<FoldOutcome<T>> = (0..folds.len())
        .into_par_iter()
        .map_init(
            CVBuffer::new,
            |buffer, fold| -> Result<FoldOutcome<T>, KernregError> {
                buffer.load_fold(dataset.x(), dataset.y(), folds, fold);
                let loaded: &CVBuffer<T> = buffer;

                let scores = bandwidths
                    .par_iter()
                    .map(|&h| score_candidate(loaded, h))
                    .collect::<Result<Vec<_>, _>>()?;

                let outcome = FoldOutcome::from_scores(fold, loaded.test_x.len(), scores)?;
                log::debug!(
                    "fold {}: best bandwidth {} (mse {})",
                    fold,
                    outcome.best.bandwidth.to_f64().unwrap_or(f64::NAN),
                    outcome.best.error.to_f64().unwrap_or(f64::NAN)
                );
                Ok(outcome)
            },
        )
        .collect::<Result<Vec<_>, KernregError>>()?;

    CVOutcome::from_folds(outcomes)
}

/// Score one candidate against a loaded fold without touching shared buffers.
#[cfg(feature = "cpu")]
fn score_candidate<T: Float>(
    buffer: &CVBuffer<T>,
    h: T,
) -> Result<BandwidthScore<T>, KernregError> {
    let predictions = NadarayaWatson::predict(&buffer.test_x, &buffer.train_x, &buffer.train_y, h);
    let error = mean_squared_error(&predictions, &buffer.test_y)?;
    Ok(BandwidthScore::new(h, error))
}
