//! Paired observation container for kernel regression.
//!
//! ## Purpose
//!
//! This module provides the `Dataset` type which holds the raw `(x, y)`
//! observations together with the number of cross-validation folds, and
//! rejects malformed input at construction time.
//!
//! ## Design notes
//!
//! * **Owned**: The dataset owns its vectors, so a trained regressor can keep
//!   it without borrowing from the caller.
//! * **Immutable**: No mutating accessors exist after construction.
//! * **Fail-Fast**: Shape is checked before the fold count.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * `2 <= num_folds <= x.len()`.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness.
//! * This module does not compute fold assignments (see `partition`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernregError;
use crate::primitives::partition::FoldAssignment;

/// Minimum number of folds for cross-validation.
pub const MIN_FOLDS: usize = 2;

/// Paired observations and the fold count used for bandwidth selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    x: Vec<T>,
    y: Vec<T>,
    num_folds: usize,
}

impl<T: Float> Dataset<T> {
    /// Create a dataset, taking ownership of the observation vectors.
    pub fn new(x: Vec<T>, y: Vec<T>, num_folds: usize) -> Result<Self, KernregError> {
        if x.len() != y.len() {
            return Err(KernregError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if num_folds < MIN_FOLDS || num_folds > x.len() {
            return Err(KernregError::InvalidFoldCount {
                folds: num_folds,
                points: x.len(),
            });
        }

        Ok(Self { x, y, num_folds })
    }

    /// Create a dataset by copying the given slices.
    pub fn from_slices(x: &[T], y: &[T], num_folds: usize) -> Result<Self, KernregError> {
        Self::new(x.to_vec(), y.to_vec(), num_folds)
    }

    /// Independent variable.
    #[inline]
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Dependent variable.
    #[inline]
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Number of cross-validation folds.
    #[inline]
    pub fn num_folds(&self) -> usize {
        self.num_folds
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false` for a validated dataset; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Shuffle and split the observation indices into this dataset's folds.
    ///
    /// Calling this again with a different seed yields a new assignment
    /// without touching the observations.
    pub fn partition(&self, seed: u64) -> Result<FoldAssignment, KernregError> {
        FoldAssignment::partition(self.len(), self.num_folds, seed)
    }
}
