//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions of the smoother:
//! the Gaussian kernel and its accumulated weight.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel weights.
pub mod kernel;
