//! Error types for kernel regression operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! dataset, partitioning it into folds, selecting a bandwidth, or predicting.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, fold counts).
//! * **Deferred**: Builder misuse is recorded and surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: `x` and `y` must pair up one-to-one.
//! 2. **Fold validation**: At least 2 folds and no more folds than observations.
//! 3. **Lifecycle**: Prediction before training is a caller error.
//! 4. **Metric guards**: Error metrics over empty or unequal batches.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context to identify the violated constraint.
//! * Numeric degeneracy (zero total kernel weight) is never reported here; it
//!   propagates as a non-finite prediction instead.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KernregError {
    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Fold count must be at least 2 and at most the number of observations.
    InvalidFoldCount {
        /// Number of folds requested.
        folds: usize,
        /// Number of observations available.
        points: usize,
    },

    /// Prediction was requested before the bandwidth was selected.
    NotTrained,

    /// An error metric was requested over zero observations.
    EmptyBatch,

    /// Predicted and actual batches passed to an error metric differ in length.
    MismatchedBatch {
        /// Number of predicted values.
        predicted: usize,
        /// Number of actual values.
        actual: usize,
    },

    /// The bandwidth candidate set is empty.
    EmptyBandwidths,

    /// A bandwidth candidate is not strictly positive and finite.
    InvalidBandwidth(f64),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernregError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidFoldCount { folds, points } => {
                write!(
                    f,
                    "Invalid fold count: {folds} (must be at least 2 and at most the {points} available points)"
                )
            }
            Self::NotTrained => {
                write!(f, "Model is not trained: call train() before predict()")
            }
            Self::EmptyBatch => write!(f, "Cannot compute an error metric over zero points"),
            Self::MismatchedBatch { predicted, actual } => {
                write!(
                    f,
                    "Batch length mismatch: {predicted} predictions for {actual} actual values"
                )
            }
            Self::EmptyBandwidths => write!(f, "Bandwidth candidate set is empty"),
            Self::InvalidBandwidth(h) => {
                write!(f, "Invalid bandwidth: {h} (must be > 0 and finite)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernregError {}
