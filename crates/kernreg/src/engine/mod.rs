//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates training and prediction: it partitions the dataset,
//! runs the bandwidth search (sequentially or through an injected pass), keeps
//! the trained state, and dispatches the two prediction modes.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Training state machine and prediction dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for kernel regression.
pub mod output;
