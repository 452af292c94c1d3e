//! High-level API for kernel regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the fold count, bandwidth candidates, and seed, and a
//! validated model that fits data and predicts.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; the
//!   fold count is checked against the data when it arrives.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelRegressionBuilder`] via `KernelRegression::new()`.
//! 2. Chain configuration methods (`.folds()`, `.bandwidths()`, `.seed()`).
//! 3. Call `.build()` to get a [`KernelRegressionModel`].
//! 4. Call `.fit()` for a trained regressor, or `.fit_predict()` for a result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CVPassFn, KernelConfig, LooPassFn, PredictPassFn};
use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;

// Publicly re-exported types
pub use crate::engine::executor::{KernelRegressor, TrainedModel};
pub use crate::engine::output::{KernelRegressionResult, PredictionMode};
pub use crate::evaluation::cv::BandwidthScore;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::KernregError;

/// Fluent builder for configuring kernel regression.
#[derive(Debug, Clone)]
pub struct KernelRegressionBuilder<T> {
    /// Number of cross-validation folds.
    pub folds: Option<usize>,

    /// Candidate bandwidths, in search order.
    pub bandwidths: Option<Vec<T>>,

    /// Seed for the fold shuffle.
    pub seed: Option<u64>,

    /// Attach fit diagnostics to leave-one-out results.
    pub return_diagnostics: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom cross-validation pass function.
    #[doc(hidden)]
    pub custom_cv_pass: Option<CVPassFn<T>>,

    /// Custom out-of-sample prediction pass function.
    #[doc(hidden)]
    pub custom_predict_pass: Option<PredictPassFn<T>>,

    /// Custom leave-one-out prediction pass function.
    #[doc(hidden)]
    pub custom_loo_pass: Option<LooPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KernelRegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            folds: None,
            bandwidths: None,
            seed: None,
            return_diagnostics: None,
            custom_cv_pass: None,
            custom_predict_pass: None,
            custom_loo_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of cross-validation folds (default 10).
    pub fn folds(mut self, folds: usize) -> Self {
        if self.folds.is_some() {
            self.duplicate_param = Some("folds");
        }
        self.folds = Some(folds);
        self
    }

    /// Set the bandwidth candidates (default `0.1, 0.2, ..., 2.0`).
    pub fn bandwidths(mut self, bandwidths: &[T]) -> Self {
        if self.bandwidths.is_some() {
            self.duplicate_param = Some("bandwidths");
        }
        self.bandwidths = Some(bandwidths.to_vec());
        self
    }

    /// Set the fold shuffle seed (default 100).
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Include fit diagnostics in leave-one-out results.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom cross-validation pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_cv_pass(mut self, pass: CVPassFn<T>) -> Self {
        self.custom_cv_pass = Some(pass);
        self
    }

    /// Set a custom out-of-sample prediction pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_predict_pass(mut self, pass: PredictPassFn<T>) -> Self {
        self.custom_predict_pass = Some(pass);
        self
    }

    /// Set a custom leave-one-out prediction pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_loo_pass(mut self, pass: LooPassFn<T>) -> Self {
        self.custom_loo_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<KernelRegressionModel<T>, KernregError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = KernelConfig::default();
        if let Some(folds) = self.folds {
            config.num_folds = folds;
        }
        if let Some(bandwidths) = self.bandwidths {
            Validator::validate_bandwidths(&bandwidths)?;
            config.bandwidths = bandwidths;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.return_diagnostics = self.return_diagnostics.unwrap_or(false);

        // ======================================
        // DEV
        // ======================================
        config.custom_cv_pass = self.custom_cv_pass;
        config.custom_predict_pass = self.custom_predict_pass;
        config.custom_loo_pass = self.custom_loo_pass;
        config.parallel = self.parallel.unwrap_or(false);

        Ok(KernelRegressionModel { config })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Validated kernel regression configuration, ready to fit data.
#[derive(Debug, Clone)]
pub struct KernelRegressionModel<T> {
    config: KernelConfig<T>,
}

impl<T: Float> KernelRegressionModel<T> {
    /// Active configuration.
    pub fn config(&self) -> &KernelConfig<T> {
        &self.config
    }

    /// Build an untrained regressor over `(x, y)`.
    pub fn regressor(&self, x: &[T], y: &[T]) -> Result<KernelRegressor<T>, KernregError> {
        let dataset = Dataset::from_slices(x, y, self.config.num_folds)?;
        Ok(KernelRegressor::new(dataset, self.config.clone()))
    }

    /// Select the bandwidth for `(x, y)` and return the trained regressor.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<KernelRegressor<T>, KernregError> {
        let mut regressor = self.regressor(x, y)?;
        regressor.train()?;
        Ok(regressor)
    }

    /// Fit, then predict at `x_to_predict` (or leave-one-out when `None`).
    pub fn fit_predict(
        &self,
        x: &[T],
        y: &[T],
        x_to_predict: Option<&[T]>,
    ) -> Result<KernelRegressionResult<T>, KernregError> {
        self.fit(x, y)?.predict_result(x_to_predict)
    }
}
