//! Reusable scratch space for cross-validation.
//!
//! ## Purpose
//!
//! This module provides `CVBuffer`, which holds the training and evaluation
//! subsets of one fold plus the prediction output, so the grid search can
//! evaluate every bandwidth candidate without reallocating.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Buffers grow via `ensure_capacity` but never shrink.
//! * **Per-Thread**: Buffers are passed explicitly, so parallel callers keep one
//!   buffer per worker.
//!
//! ## Invariants
//!
//! * After `load_fold`, `train_x`/`train_y` and `test_x`/`test_y` are pairwise
//!   equal in length and `predictions.len() == test_x.len()`.
//! * Training and evaluation subsets are disjoint.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching.
//! * Dynamic shrinking or memory reclamation.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::partition::FoldAssignment;

// ============================================================================
// CV Buffers
// ============================================================================

/// Buffers used during cross-validation to hold training and evaluation subsets.
#[derive(Debug, Clone)]
pub struct CVBuffer<T> {
    /// Training subset x-values.
    pub train_x: Vec<T>,
    /// Training subset y-values.
    pub train_y: Vec<T>,
    /// Evaluation subset x-values.
    pub test_x: Vec<T>,
    /// Evaluation subset y-values.
    pub test_y: Vec<T>,
    /// Predictions for the evaluation subset.
    pub predictions: Vec<T>,
}

impl<T> Default for CVBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CVBuffer<T> {
    /// Create empty buffers.
    pub fn new() -> Self {
        Self {
            train_x: Vec::new(),
            train_y: Vec::new(),
            test_x: Vec::new(),
            test_y: Vec::new(),
            predictions: Vec::new(),
        }
    }

    /// Ensure every buffer can hold `n` elements without reallocating.
    pub fn ensure_capacity(&mut self, n: usize) {
        for buf in [
            &mut self.train_x,
            &mut self.train_y,
            &mut self.test_x,
            &mut self.test_y,
            &mut self.predictions,
        ] {
            if buf.capacity() < n {
                buf.reserve(n - buf.len());
            }
        }
    }
}

impl<T: Float> CVBuffer<T> {
    /// Fill the buffers with fold `fold` as evaluation set and every other
    /// fold as training set.
    pub fn load_fold(&mut self, x: &[T], y: &[T], folds: &FoldAssignment, fold: usize) {
        self.ensure_capacity(x.len());

        self.train_x.clear();
        self.train_y.clear();
        for idx in folds.training_indices(fold) {
            self.train_x.push(x[idx]);
            self.train_y.push(y[idx]);
        }

        self.test_x.clear();
        self.test_y.clear();
        for &idx in folds.fold(fold) {
            self.test_x.push(x[idx]);
            self.test_y.push(y[idx]);
        }

        self.predictions.clear();
        self.predictions.resize(self.test_x.len(), T::zero());
    }
}
