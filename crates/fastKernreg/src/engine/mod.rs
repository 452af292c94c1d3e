//! Layer 5: Engine
//!
//! This layer provides the parallel prediction passes injected into the
//! `kernreg` regressor.

// Parallel prediction passes using CPU threads
pub mod executor;
