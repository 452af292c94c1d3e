//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data containers, error types, and scratch buffers
//! used throughout the crate. It has no dependencies on higher layers.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Paired observation container.
pub mod dataset;

/// Seeded fold partitioning.
pub mod partition;

/// Buffer management.
pub mod buffer;
