//! Input validation for kernel regression configuration.
//!
//! ## Purpose
//!
//! This module checks builder parameters before any data is seen: bandwidth
//! candidates and duplicate settings.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Every accepted bandwidth is strictly positive and finite.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check the fold count against the data length
//!   (`Dataset::new` does, once the data is known).
//! * This module does not correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernregError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel regression configuration.
pub struct Validator;

impl Validator {
    /// Validate a single bandwidth.
    pub fn validate_bandwidth<T: Float>(h: T) -> Result<(), KernregError> {
        if !h.is_finite() || h <= T::zero() {
            return Err(KernregError::InvalidBandwidth(h.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a candidate set for cross-validation.
    pub fn validate_bandwidths<T: Float>(bandwidths: &[T]) -> Result<(), KernregError> {
        if bandwidths.is_empty() {
            return Err(KernregError::EmptyBandwidths);
        }

        for &h in bandwidths {
            Self::validate_bandwidth(h)?;
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KernregError> {
        if let Some(param) = duplicate_param {
            return Err(KernregError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
