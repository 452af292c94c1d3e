//! High-level API for kernel regression with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastKernreg`. It wraps
//! the `kernreg` builder, installs the rayon passes, and accepts slice, vector,
//! and ndarray inputs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `kernreg` builder and its validation.
//! * **Parallel-First**: Defaults to parallel execution; `.parallel(false)`
//!   restores the sequential core.
//! * **Feature-Gated**: Without the `cpu` feature every call runs sequentially.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelKernelRegressionBuilder`] via `KernelRegression::new()`.
//! 2. Chain configuration methods (`.folds()`, `.bandwidths()`, `.parallel()`).
//! 3. Call `.build()`, then `.fit()` or `.fit_predict()`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{loo_pass_parallel, predict_pass_parallel};
#[cfg(feature = "cpu")]
use crate::evaluation::cv::cv_pass_parallel;

// External dependencies
use num_traits::Float;

// Export dependencies from kernreg crate
use kernreg::internals::api::{KernelRegressionBuilder, KernelRegressionModel};

// Internal dependencies
use crate::input::KernregInput;

// Publicly re-exported types
pub use kernreg::internals::api::{
    BandwidthScore, Diagnostics, KernelRegressionResult, KernelRegressor, KernregError,
    PredictionMode, TrainedModel,
};

// ============================================================================
// Parallel Builder
// ============================================================================

/// Builder for kernel regression with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelKernelRegressionBuilder<T> {
    /// Base builder from the kernreg crate
    pub base: KernelRegressionBuilder<T>,
}

impl<T: Float> Default for ParallelKernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelKernelRegressionBuilder<T> {
    /// Create a new builder with default settings (parallel enabled).
    pub fn new() -> Self {
        Self {
            base: KernelRegressionBuilder::new(),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the number of cross-validation folds (default 10).
    pub fn folds(mut self, folds: usize) -> Self {
        self.base = self.base.folds(folds);
        self
    }

    /// Set the bandwidth candidates (default `0.1, 0.2, ..., 2.0`).
    pub fn bandwidths(mut self, bandwidths: &[T]) -> Self {
        self.base = self.base.bandwidths(bandwidths);
        self
    }

    /// Set the fold shuffle seed (default 100).
    pub fn seed(mut self, seed: u64) -> Self {
        self.base = self.base.seed(seed);
        self
    }

    /// Include fit diagnostics in leave-one-out results.
    pub fn return_diagnostics(mut self) -> Self {
        self.base = self.base.return_diagnostics();
        self
    }

    /// Whether the built model will use the parallel passes.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "cpu") && self.base.parallel.unwrap_or(true)
    }
}

impl<T: Float + Send + Sync + 'static> ParallelKernelRegressionBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<ParallelKernelRegression<T>, KernregError> {
        let parallel = self.is_parallel();
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if parallel {
                builder = builder
                    .custom_cv_pass(cv_pass_parallel)
                    .custom_predict_pass(predict_pass_parallel)
                    .custom_loo_pass(loo_pass_parallel);
            } else {
                builder.custom_cv_pass = None;
                builder.custom_predict_pass = None;
                builder.custom_loo_pass = None;
            }
        }
        builder = builder.parallel(parallel);

        Ok(ParallelKernelRegression {
            model: builder.build()?,
        })
    }
}

// ============================================================================
// Parallel Model
// ============================================================================

/// Kernel regression model with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelKernelRegression<T> {
    model: KernelRegressionModel<T>,
}

impl<T: Float> ParallelKernelRegression<T> {
    /// Whether the parallel passes are installed.
    pub fn is_parallel(&self) -> bool {
        self.model.config().parallel
    }

    /// The underlying `kernreg` model.
    pub fn base(&self) -> &KernelRegressionModel<T> {
        &self.model
    }

    /// Select the bandwidth for `(x, y)` and return the trained regressor.
    pub fn fit<I1, I2>(&self, x: &I1, y: &I2) -> Result<KernelRegressor<T>, KernregError>
    where
        I1: KernregInput<T> + ?Sized,
        I2: KernregInput<T> + ?Sized,
    {
        self.model.fit(x.as_kernreg_slice()?, y.as_kernreg_slice()?)
    }

    /// Fit, then predict every observation from all the others.
    pub fn fit_predict<I1, I2>(
        &self,
        x: &I1,
        y: &I2,
    ) -> Result<KernelRegressionResult<T>, KernregError>
    where
        I1: KernregInput<T> + ?Sized,
        I2: KernregInput<T> + ?Sized,
    {
        self.fit(x, y)?.predict_result(None)
    }

    /// Fit, then predict at `x_new` from the full dataset.
    pub fn fit_predict_at<I1, I2, I3>(
        &self,
        x: &I1,
        y: &I2,
        x_new: &I3,
    ) -> Result<KernelRegressionResult<T>, KernregError>
    where
        I1: KernregInput<T> + ?Sized,
        I2: KernregInput<T> + ?Sized,
        I3: KernregInput<T> + ?Sized,
    {
        self.fit(x, y)?.predict_result(Some(x_new.as_kernreg_slice()?))
    }
}
