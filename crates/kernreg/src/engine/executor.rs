//! Training and prediction engine for kernel regression.
//!
//! ## Purpose
//!
//! This module owns the regressor state machine. `train()` partitions the
//! dataset, runs the bandwidth search, and records the optimal bandwidth;
//! the prediction methods then apply it out-of-sample or leave-one-out.
//!
//! ## Design notes
//!
//! * **Composition**: The regressor owns its `Dataset`; the fold assignment is
//!   produced per `train()` call and kept in the trained state.
//! * **Injected Passes**: Extension crates supply parallel CV and prediction
//!   passes through hidden function-pointer fields on `KernelConfig`.
//! * **Retraining**: `train()` may be called again; with the same seed and
//!   candidates it reaches the same state.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * A trained model's bandwidth is a member of the configured candidate set.
//! * Prediction output is aligned with its evaluation input.
//! * Prediction is only possible in the trained state.
//!
//! ## Non-goals
//!
//! * This module does not implement the parallel passes (see extension crates).
//! * This module does not update a trained model incrementally.
//! * This module does not persist trained models.

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
use crate::algorithms::regression::NadarayaWatson;
use crate::engine::output::{KernelRegressionResult, PredictionMode};
use crate::engine::validator::Validator;
use crate::evaluation::cv::{default_bandwidths, CVOutcome, KFoldSearch};
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::KernregError;
use crate::primitives::partition::{FoldAssignment, DEFAULT_SEED};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom cross-validation pass function
#[doc(hidden)]
pub type CVPassFn<T> = fn(
    &Dataset<T>,     // observations
    &FoldAssignment, // folds
    &[T],            // candidate bandwidths
) -> Result<CVOutcome<T>, KernregError>;

/// Signature for custom out-of-sample prediction pass function
#[doc(hidden)]
pub type PredictPassFn<T> = fn(
    &[T],     // evaluation x
    &[T],     // training x
    &[T],     // training y
    T,        // bandwidth
    &mut [T], // output
);

/// Signature for custom leave-one-out prediction pass function
#[doc(hidden)]
pub type LooPassFn<T> = fn(
    &[T],     // x
    &[T],     // y
    T,        // bandwidth
    &mut [T], // output
);

/// Default number of cross-validation folds.
pub const DEFAULT_FOLDS: usize = 10;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for training and prediction.
#[derive(Debug, Clone)]
pub struct KernelConfig<T> {
    /// Number of cross-validation folds.
    pub num_folds: usize,

    /// Ordered bandwidth candidates.
    pub bandwidths: Vec<T>,

    /// Seed for the fold shuffle.
    pub seed: u64,

    /// Whether results should carry fit diagnostics.
    pub return_diagnostics: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom cross-validation pass function.
    #[doc(hidden)]
    pub custom_cv_pass: Option<CVPassFn<T>>,

    /// Custom out-of-sample prediction pass function.
    #[doc(hidden)]
    pub custom_predict_pass: Option<PredictPassFn<T>>,

    /// Custom leave-one-out prediction pass function.
    #[doc(hidden)]
    pub custom_loo_pass: Option<LooPassFn<T>>,

    /// Whether to use the custom passes.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for KernelConfig<T> {
    fn default() -> Self {
        Self {
            num_folds: DEFAULT_FOLDS,
            bandwidths: default_bandwidths(),
            seed: DEFAULT_SEED,
            return_diagnostics: false,
            custom_cv_pass: None,
            custom_predict_pass: None,
            custom_loo_pass: None,
            parallel: false,
        }
    }
}

impl<T> KernelConfig<T> {
    fn cv_pass(&self) -> Option<CVPassFn<T>> {
        self.custom_cv_pass.filter(|_| self.parallel)
    }

    fn predict_pass(&self) -> Option<PredictPassFn<T>> {
        self.custom_predict_pass.filter(|_| self.parallel)
    }

    fn loo_pass(&self) -> Option<LooPassFn<T>> {
        self.custom_loo_pass.filter(|_| self.parallel)
    }
}

// ============================================================================
// Trained State
// ============================================================================

/// Outcome of a completed `train()` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel<T> {
    /// Selected bandwidth.
    pub optimal_bandwidth: T,

    /// Full cross-validation record.
    pub cv: CVOutcome<T>,

    /// Fold assignment the search ran on.
    pub folds: FoldAssignment,
}

#[derive(Debug, Clone, PartialEq)]
enum ModelState<T> {
    Untrained,
    Trained(TrainedModel<T>),
}

// ============================================================================
// Regressor
// ============================================================================

/// Gaussian-kernel regressor with k-fold bandwidth selection.
#[derive(Debug, Clone)]
pub struct KernelRegressor<T> {
    dataset: Dataset<T>,
    config: KernelConfig<T>,
    state: ModelState<T>,
}

impl<T: Float> KernelRegressor<T> {
    /// Create an untrained regressor over `dataset`.
    pub fn new(dataset: Dataset<T>, config: KernelConfig<T>) -> Self {
        Self {
            dataset,
            config,
            state: ModelState::Untrained,
        }
    }

    /// Observations the regressor was built on.
    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    /// Active configuration.
    pub fn config(&self) -> &KernelConfig<T> {
        &self.config
    }

    /// `true` once `train()` has succeeded.
    pub fn is_trained(&self) -> bool {
        matches!(self.state, ModelState::Trained(_))
    }

    /// Trained state, if any.
    pub fn model(&self) -> Option<&TrainedModel<T>> {
        match &self.state {
            ModelState::Trained(model) => Some(model),
            ModelState::Untrained => None,
        }
    }

    /// Selected bandwidth.
    pub fn optimal_bandwidth(&self) -> Result<T, KernregError> {
        self.model()
            .map(|m| m.optimal_bandwidth)
            .ok_or(KernregError::NotTrained)
    }

    // ========================================================================
    // Training
    // ========================================================================

    /// Select the bandwidth by k-fold cross-validation and return it.
    pub fn train(&mut self) -> Result<T, KernregError> {
        Validator::validate_bandwidths(&self.config.bandwidths)?;

        let folds = self.dataset.partition(self.config.seed)?;
        let cv = match self.config.cv_pass() {
            Some(pass) => pass(&self.dataset, &folds, &self.config.bandwidths)?,
            None => KFoldSearch::run(&self.dataset, &folds, &self.config.bandwidths)?,
        };

        log::info!(
            "selected bandwidth {} over {} folds and {} candidates (mse {})",
            cv.optimal.bandwidth.to_f64().unwrap_or(f64::NAN),
            folds.len(),
            self.config.bandwidths.len(),
            cv.optimal.error.to_f64().unwrap_or(f64::NAN)
        );

        let optimal_bandwidth = cv.optimal.bandwidth;
        self.state = ModelState::Trained(TrainedModel {
            optimal_bandwidth,
            cv,
            folds,
        });

        Ok(optimal_bandwidth)
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Predict at `x_to_predict`, or leave-one-out over the sample when `None`.
    pub fn predict(&self, x_to_predict: Option<&[T]>) -> Result<Vec<T>, KernregError> {
        match x_to_predict {
            Some(x_new) => self.predict_out_of_sample(x_new),
            None => self.predict_in_sample(),
        }
    }

    /// Predict new points from the full dataset.
    pub fn predict_out_of_sample(&self, x_new: &[T]) -> Result<Vec<T>, KernregError> {
        let h = self.optimal_bandwidth()?;
        let mut out = vec![T::zero(); x_new.len()];
        let pass = self
            .config
            .predict_pass()
            .unwrap_or(NadarayaWatson::predict_into::<T>);
        pass(x_new, self.dataset.x(), self.dataset.y(), h, &mut out);

        warn_non_finite(&out);
        Ok(out)
    }

    /// Predict every observation from all the others.
    pub fn predict_in_sample(&self) -> Result<Vec<T>, KernregError> {
        let h = self.optimal_bandwidth()?;
        let mut out = vec![T::zero(); self.dataset.len()];
        let pass = self
            .config
            .loo_pass()
            .unwrap_or(NadarayaWatson::leave_one_out_into::<T>);
        pass(self.dataset.x(), self.dataset.y(), h, &mut out);

        warn_non_finite(&out);
        Ok(out)
    }

    /// Predict and bundle the result with the selection record.
    ///
    /// Diagnostics are attached in leave-one-out mode when the configuration
    /// asks for them, since only then are observed responses available.
    pub fn predict_result(
        &self,
        x_to_predict: Option<&[T]>,
    ) -> Result<KernelRegressionResult<T>, KernregError> {
        let model = self.model().ok_or(KernregError::NotTrained)?;
        let y = self.predict(x_to_predict)?;

        let (x, mode) = match x_to_predict {
            Some(x_new) => (x_new.to_vec(), PredictionMode::OutOfSample),
            None => (self.dataset.x().to_vec(), PredictionMode::LeaveOneOut),
        };

        let diagnostics = match mode {
            PredictionMode::LeaveOneOut if self.config.return_diagnostics => {
                Some(Diagnostics::compute(self.dataset.y(), &y))
            }
            _ => None,
        };

        Ok(KernelRegressionResult {
            x,
            y,
            mode,
            bandwidth_used: model.optimal_bandwidth,
            bandwidths: self.config.bandwidths.clone(),
            fold_winners: model.cv.fold_winners(),
            cv_scores: model.cv.score_grid(),
            diagnostics,
        })
    }

    /// Train, then predict.
    pub fn train_and_predict(&mut self, x_to_predict: Option<&[T]>) -> Result<Vec<T>, KernregError> {
        self.train()?;
        self.predict(x_to_predict)
    }
}

fn warn_non_finite<T: Float>(predictions: &[T]) {
    let count = predictions.iter().filter(|p| !p.is_finite()).count();
    if count > 0 {
        log::warn!(
            "{} of {} predictions are non-finite (zero total kernel weight)",
            count,
            predictions.len()
        );
    }
}
