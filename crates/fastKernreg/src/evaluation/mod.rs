//! Layer 4: Evaluation
//!
//! This layer provides the parallel bandwidth search: folds and candidates
//! evaluated concurrently, reduced with the same stable minimum as `kernreg`.

// Parallel cross-validation for bandwidth selection
pub mod cv;
