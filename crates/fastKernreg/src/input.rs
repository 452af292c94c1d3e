//! Input abstractions for kernel regression.
//!
//! ## Purpose
//!
//! This module lets `fit` and prediction accept slices, vectors, and
//! one-dimensional ndarray arrays through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected rather than copied.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle multi-dimensional inputs.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from kernreg crate
use kernreg::internals::primitives::errors::KernregError;

/// Trait for types that can be used as input for kernel regression.
pub trait KernregInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_kernreg_slice(&self) -> Result<&[T], KernregError>;
}

impl<T: Float> KernregInput<T> for [T] {
    fn as_kernreg_slice(&self) -> Result<&[T], KernregError> {
        Ok(self)
    }
}

impl<T: Float> KernregInput<T> for Vec<T> {
    fn as_kernreg_slice(&self) -> Result<&[T], KernregError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> KernregInput<T> for [T; N] {
    fn as_kernreg_slice(&self) -> Result<&[T], KernregError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> KernregInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_kernreg_slice(&self) -> Result<&[T], KernregError> {
        self.as_slice().ok_or_else(|| {
            KernregError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
