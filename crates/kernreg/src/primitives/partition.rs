//! Seeded fold partitioning for k-fold cross-validation.
//!
//! ## Purpose
//!
//! This module shuffles observation indices with a seeded generator and splits
//! them into near-equal contiguous folds.
//!
//! ## Design notes
//!
//! * **Scoped RNG**: Every call builds its own generator from the seed; there is
//!   no process-wide random state, so concurrent partitioning is deterministic.
//! * **Balanced Split**: The first `n % k` folds hold `ceil(n / k)` indices and
//!   the rest hold `floor(n / k)`.
//! * **No-std**: The generator is a 64-bit LCG with no external dependency.
//!
//! ## Invariants
//!
//! * Folds form a partition of `0..n`: every index appears exactly once.
//! * Any two fold sizes differ by at most one.
//! * Output depends only on `(n, k, seed)`.
//!
//! ## Non-goals
//!
//! * This module does not stratify folds by response value.
//! * This module does not build the training/evaluation subsets (see `buffer`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::dataset::MIN_FOLDS;
use crate::primitives::errors::KernregError;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 100;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std shuffling.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub(crate) struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Fisher-Yates shuffle driven by this generator.
    pub(crate) fn shuffle<E>(&mut self, items: &mut [E]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_u32() as usize) % (i + 1);
            items.swap(i, j);
        }
    }
}

// ============================================================================
// Fold Assignment
// ============================================================================

/// A partition of observation indices into cross-validation folds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    folds: Vec<Vec<usize>>,
}

impl FoldAssignment {
    /// Shuffle `0..n` with `seed` and split it into `num_folds` balanced groups.
    pub fn partition(n: usize, num_folds: usize, seed: u64) -> Result<Self, KernregError> {
        if num_folds < MIN_FOLDS || num_folds > n {
            return Err(KernregError::InvalidFoldCount {
                folds: num_folds,
                points: n,
            });
        }

        let mut indices: Vec<usize> = (0..n).collect();
        SimpleRng::new(seed).shuffle(&mut indices);

        let base = n / num_folds;
        let remainder = n % num_folds;

        let mut folds = Vec::with_capacity(num_folds);
        let mut start = 0;
        for fold in 0..num_folds {
            let size = if fold < remainder { base + 1 } else { base };
            folds.push(indices[start..start + size].to_vec());
            start += size;
        }

        Ok(Self { folds })
    }

    /// Number of folds.
    #[inline]
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    /// `true` only for an assignment with no folds, which `partition` never returns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Indices of fold `i`.
    #[inline]
    pub fn fold(&self, i: usize) -> &[usize] {
        &self.folds[i]
    }

    /// Iterate over the folds in order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.folds.iter().map(Vec::as_slice)
    }

    /// Size of every fold, in order.
    pub fn sizes(&self) -> Vec<usize> {
        self.folds.iter().map(Vec::len).collect()
    }

    /// Total number of indices across all folds.
    pub fn total(&self) -> usize {
        self.folds.iter().map(Vec::len).sum()
    }

    /// Indices of every fold except `i`, concatenated in fold order.
    pub fn training_indices(&self, i: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.total() - self.folds[i].len());
        for (j, fold) in self.folds.iter().enumerate() {
            if j != i {
                out.extend_from_slice(fold);
            }
        }
        out
    }
}
