//! Nadaraya-Watson weighted prediction.
//!
//! ## Purpose
//!
//! This module turns kernel weights into predictions: the prediction at an
//! evaluation point is the kernel-weighted mean of the training responses.
//!
//! ## Design notes
//!
//! * **Two Passes**: The total weight is computed first, then each weighted
//!   response is divided by it, matching the textbook formula term by term.
//! * **Leave-One-Out**: In-sample prediction skips index `i` while iterating
//!   rather than materializing `n` training subsets.
//! * **Output Buffers**: Batch functions write into caller-provided slices so
//!   cross-validation can reuse its buffers.
//!
//! ## Invariants
//!
//! * Output position `i` corresponds to evaluation point `i`.
//! * A zero total weight produces a non-finite value at that position only.
//!
//! ## Non-goals
//!
//! * This module does not select the bandwidth.
//! * This module does not replace non-finite predictions with fallbacks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;

// ============================================================================
// Nadaraya-Watson Estimator
// ============================================================================

/// Kernel-weighted mean estimator over a training set.
pub struct NadarayaWatson;

impl NadarayaWatson {
    /// Predict the response at a single point.
    #[inline]
    pub fn predict_point<T: Float>(x_eval: T, train_x: &[T], train_y: &[T], h: T) -> T {
        let total_weight = GaussianKernel::total_weight(x_eval, train_x, h);

        let mut y_pred = T::zero();
        for (&x_tr, &y_tr) in train_x.iter().zip(train_y.iter()) {
            y_pred = y_pred + GaussianKernel::weight(x_eval, x_tr, h) * y_tr / total_weight;
        }
        y_pred
    }

    /// Predict every evaluation point into `out`.
    pub fn predict_into<T: Float>(
        eval_x: &[T],
        train_x: &[T],
        train_y: &[T],
        h: T,
        out: &mut [T],
    ) {
        for (slot, &x_ev) in out.iter_mut().zip(eval_x.iter()) {
            *slot = Self::predict_point(x_ev, train_x, train_y, h);
        }
    }

    /// Predict every evaluation point.
    pub fn predict<T: Float>(eval_x: &[T], train_x: &[T], train_y: &[T], h: T) -> Vec<T> {
        let mut out = vec![T::zero(); eval_x.len()];
        Self::predict_into(eval_x, train_x, train_y, h, &mut out);
        out
    }

    /// Predict observation `i` from every other observation.
    pub fn predict_excluding<T: Float>(x: &[T], y: &[T], i: usize, h: T) -> T {
        let x_eval = x[i];

        let mut total_weight = T::zero();
        for (j, &x_tr) in x.iter().enumerate() {
            if j != i {
                total_weight = total_weight + GaussianKernel::weight(x_eval, x_tr, h);
            }
        }

        let mut y_pred = T::zero();
        for (j, (&x_tr, &y_tr)) in x.iter().zip(y.iter()).enumerate() {
            if j != i {
                y_pred = y_pred + GaussianKernel::weight(x_eval, x_tr, h) * y_tr / total_weight;
            }
        }
        y_pred
    }

    /// Leave-one-out prediction for every observation into `out`.
    pub fn leave_one_out_into<T: Float>(x: &[T], y: &[T], h: T, out: &mut [T]) {
        for (i, slot) in out.iter_mut().enumerate().take(x.len()) {
            *slot = Self::predict_excluding(x, y, i, h);
        }
    }

    /// Leave-one-out prediction for every observation.
    pub fn leave_one_out<T: Float>(x: &[T], y: &[T], h: T) -> Vec<T> {
        let mut out = vec![T::zero(); x.len()];
        Self::leave_one_out_into(x, y, h, &mut out);
        out
    }
}
