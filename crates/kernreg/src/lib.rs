//! # kernreg - Gaussian-kernel regression with cross-validated bandwidth
//!
//! A Nadaraya-Watson kernel smoother for one-dimensional data. The kernel
//! bandwidth is chosen by exhaustive k-fold cross-validation over a grid of
//! candidates; the trained model then predicts new points from the full
//! dataset, or each observation from all the others (leave-one-out).
//!
//! ## What is Nadaraya-Watson regression?
//!
//! The prediction at a point `x` is the weighted mean of the observed
//! responses, each weighted by the Gaussian kernel `exp(-(x - x_i)^2 / h)`.
//! Small bandwidths follow the data closely; large bandwidths flatten the
//! prediction toward the sample mean.
//!
//! ## Quick Start
//!
//! ### Leave-one-out
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let y = x.clone();
//!
//! // Build the model
//! let model = KernelRegression::new()
//!     .folds(5)           // 5-fold cross-validation
//!     .return_diagnostics()
//!     .build()?;
//!
//! // Select the bandwidth, then predict every observation from the others
//! let result = model.fit_predict(&x, &y, None)?;
//!
//! println!("{}", result);
//! # Result::<(), KernregError>::Ok(())
//! ```
//!
//! ### New points
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let x = vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
//! let y = vec![0.1, 0.4, 0.9, 1.6, 2.1, 2.4, 2.9, 3.6];
//!
//! let model = KernelRegression::new()
//!     .folds(4)
//!     .bandwidths(&[0.05, 0.1, 0.5, 1.0])
//!     .seed(7)
//!     .build()?;
//!
//! let regressor = model.fit(&x, &y)?;
//! let predictions = regressor.predict(Some(&[0.25, 1.75, 3.25]))?;
//!
//! assert_eq!(predictions.len(), 3);
//! assert!([0.05, 0.1, 0.5, 1.0].contains(&regressor.optimal_bandwidth()?));
//! # Result::<(), KernregError>::Ok(())
//! ```
//!
//! ## Bandwidth selection
//!
//! 1. Indices `0..n` are shuffled with a seeded generator (default seed 100)
//!    and split into `k` folds whose sizes differ by at most one.
//! 2. For each fold, every candidate is scored by the mean squared error of
//!    predicting the fold from the remaining folds; the fold keeps its best
//!    candidate.
//! 3. The fold winner with the smallest error is the selected bandwidth.
//!
//! Ties resolve to the earliest candidate (and the earliest fold), so results
//! are deterministic for a fixed seed and candidate set.
//!
//! ## Numerical notes
//!
//! When every kernel weight underflows to zero (a point far from all training
//! data with a small bandwidth), the prediction is non-finite. This is reported
//! through `log::warn!` and `KernelRegressionResult::non_finite_count`, never
//! replaced with a fallback.
//!
//! ## Features
//!
//! * `std` (default): standard library support. Without it the crate is
//!   `no_std` + `alloc`.
//! * `dev`: exposes the `internals` module for extension crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data containers, errors, and buffers.
mod primitives;

// Layer 2: Math - the Gaussian kernel.
mod math;

// Layer 3: Algorithms - Nadaraya-Watson prediction.
mod algorithms;

// Layer 4: Evaluation - error metrics, cross-validation, and diagnostics.
mod evaluation;

// Layer 5: Engine - training state and prediction dispatch.
mod engine;

// High-level fluent API for kernel regression.
mod api;

// Standard kernel regression prelude.
pub mod prelude {
    pub use crate::api::{
        BandwidthScore, Diagnostics, KernelRegressionBuilder as KernelRegression,
        KernelRegressionModel, KernelRegressionResult, KernelRegressor, KernregError,
        PredictionMode, TrainedModel,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
