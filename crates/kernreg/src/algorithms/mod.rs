//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the Nadaraya-Watson estimator on top of the kernel
//! weights: batch prediction against a training set and leave-one-out
//! prediction over the sample itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted kernel prediction.
pub mod regression;
