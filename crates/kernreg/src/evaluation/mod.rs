//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores predictions and selects the bandwidth:
//! - Mean squared error and stable-minimum selection
//! - Exhaustive k-fold grid search over bandwidth candidates
//! - Fit-quality diagnostics for the final predictions
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cross-validation for bandwidth selection.
pub mod cv;

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;
