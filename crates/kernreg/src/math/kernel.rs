//! Gaussian kernel weights for Nadaraya-Watson regression.
//!
//! ## Purpose
//!
//! This module computes the weight that a training point contributes to the
//! prediction at an evaluation point, and the total weight over a training set.
//!
//! ## Design notes
//!
//! * **Formula**: `K(x1, x2; h) = exp(-(x1 - x2)^2 / h)`. The bandwidth divides
//!   the squared distance directly (no factor of 2, no square on `h`).
//! * **No Cutoff**: Weights are allowed to underflow to exactly zero; callers see
//!   the resulting non-finite prediction rather than a silently clamped one.
//!
//! ## Invariants
//!
//! * `K(x1, x2; h) == K(x2, x1; h)`.
//! * `K(x, x; h) == 1`.
//! * `K` decreases in `|x1 - x2|` and increases in `h` for a fixed nonzero distance.
//!
//! ## Non-goals
//!
//! * This module does not validate `h`; non-positive bandwidths are a caller error.
//! * This module does not provide alternative kernel shapes.

// External dependencies
use num_traits::Float;

/// The Gaussian kernel `exp(-(x1 - x2)^2 / h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GaussianKernel;

impl GaussianKernel {
    /// Name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        "Gaussian"
    }

    /// Weight of `x2` as seen from `x1` at bandwidth `h`.
    #[inline]
    pub fn weight<T: Float>(x1: T, x2: T, h: T) -> T {
        let delta = x1 - x2;
        (-(delta * delta) / h).exp()
    }

    /// Sum of the weights of every training point as seen from `x_eval`.
    #[inline]
    pub fn total_weight<T: Float>(x_eval: T, training_x: &[T], h: T) -> T {
        training_x
            .iter()
            .fold(T::zero(), |acc, &x_tr| acc + Self::weight(x_eval, x_tr, h))
    }
}
