//! Parallel prediction passes for kernel regression.
//!
//! ## Purpose
//!
//! This module provides the out-of-sample and leave-one-out prediction passes
//! injected into the `kernreg` regressor. Each evaluation point is independent,
//! so points are distributed across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes.
//! * **Parallelism**: Uses `rayon` over the output slice.
//! * **Consistency**: Each point uses the same per-point routine as `kernreg`,
//!   so results are bit-identical to the sequential passes.
//!
//! ## Invariants
//!
//! * `out[i]` is the prediction for evaluation point `i`.
//!
//! ## Non-goals
//!
//! * This module does not select the bandwidth.
//! * This module does not validate input data.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use num_traits::Float;

// Export dependencies from kernreg crate
#[cfg(feature = "cpu")]
use kernreg::internals::algorithms::regression::NadarayaWatson;

// ============================================================================
// Parallel Prediction Functions
// ============================================================================

/// Predict every evaluation point from the training set in parallel.
#[cfg(feature = "cpu")]
pub fn predict_pass_parallel<T>(eval_x: &[T], train_x: &[T], train_y: &[T], h: T, out: &mut [T])
where
    T: Float + Send + Sync,
{
    out.par_iter_mut()
        .zip(eval_x.par_iter())
        .for_each(|(slot, &x_ev)| {
            *slot = NadarayaWatson::predict_point(x_ev, train_x, train_y, h);
        });
}

/// Predict every observation from all the others in parallel.
#[cfg(feature = "cpu")]
pub fn loo_pass_parallel<T>(x: &[T], y: &[T], h: T, out: &mut [T])
where
    T: Float + Send + Sync,
{
    out.par_iter_mut()
        .take(x.len())
        .enumerate()
        .for_each(|(i, slot)| {
            *slot = NadarayaWatson::predict_excluding(x, y, i, h);
        });
}
