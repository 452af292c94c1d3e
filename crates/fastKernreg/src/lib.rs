//! # fastKernreg - parallel Gaussian-kernel regression
//!
//! A parallel extension of [`kernreg`]: the same Nadaraya-Watson smoother and
//! k-fold bandwidth selection, with folds, candidates, and prediction points
//! distributed across CPU cores with rayon. Selection and predictions match
//! the sequential core exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastKernreg::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::linspace(0.0, 6.0, 61);
//! let y = x.mapv(f64::sin);
//!
//! // Build the model with parallel execution (default)
//! let model = KernelRegression::new()
//!     .folds(5)
//!     .return_diagnostics()
//!     .build()?;
//!
//! // Leave-one-out predictions for the sample
//! let result = model.fit_predict(&x, &y)?;
//! println!("{}", result);
//!
//! // Predictions at new points
//! let x_new = Array1::from_vec(vec![0.55, 3.05]);
//! let result = model.fit_predict_at(&x, &y, &x_new)?;
//! assert_eq!(result.y.len(), 2);
//! # Result::<(), KernregError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): rayon-backed passes. Without it every call runs the
//!   sequential `kernreg` code.
//! * `dev`: exposes the `internals` module.

#![allow(non_snake_case)]

// Layer 4: Evaluation - parallel bandwidth search.
mod evaluation;

// Layer 5: Engine - parallel prediction passes.
mod engine;

// High-level fluent API for kernel regression.
mod api;

// Input data handling.
mod input;

// Standard fastKernreg prelude.
pub mod prelude {
    pub use crate::api::{
        BandwidthScore, Diagnostics, KernelRegressionResult, KernelRegressor, KernregError,
        ParallelKernelRegression, ParallelKernelRegressionBuilder as KernelRegression,
        PredictionMode, TrainedModel,
    };
    pub use crate::input::KernregInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
