//! Diagnostic metrics for kernel regression fit quality.
//!
//! ## Purpose
//!
//! This module summarizes how well a set of predictions matches the observed
//! responses, and how many predictions came out non-finite.
//!
//! ## Design notes
//!
//! * **Finite Pairs**: Metrics are computed only over positions where the
//!   prediction is finite; non-finite predictions are counted separately.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * MSE, RMSE, and MAE are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//! * `finite + non_finite == n`.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting or bandwidth selection.
//! * This module does not compute confidence intervals or information criteria.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing kernel regression fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Mean Squared Error (MSE).
    pub mse: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Number of pairs the metrics were computed over.
    pub finite: usize,

    /// Number of non-finite predictions excluded from the metrics.
    pub non_finite: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observed responses and their predictions.
    ///
    /// With no finite pair, every metric is NaN.
    pub fn compute(y: &[T], y_pred: &[T]) -> Self {
        let mut finite = 0usize;
        let mut non_finite = 0usize;
        let mut sum_y = T::zero();
        for (&yi, &yp) in y.iter().zip(y_pred.iter()) {
            if yp.is_finite() {
                finite += 1;
                sum_y = sum_y + yi;
            } else {
                non_finite += 1;
            }
        }

        if finite == 0 {
            return Self {
                mse: T::nan(),
                rmse: T::nan(),
                mae: T::nan(),
                r_squared: T::nan(),
                finite,
                non_finite,
            };
        }

        let n_t = T::from(finite).unwrap_or_else(T::one);
        let mean = sum_y / n_t;

        let (ss_res, ss_abs, ss_tot) = y
            .iter()
            .zip(y_pred.iter())
            .filter(|(_, yp)| yp.is_finite())
            .fold(
                (T::zero(), T::zero(), T::zero()),
                |(res, abs, tot), (&yi, &yp)| {
                    let r = yi - yp;
                    let d = yi - mean;
                    (res + r * r, abs + r.abs(), tot + d * d)
                },
            );

        let mse = ss_res / n_t;

        Self {
            mse,
            rmse: mse.sqrt(),
            mae: ss_abs / n_t,
            r_squared: Self::r_squared_from(ss_res, ss_tot),
            finite,
            non_finite,
        }
    }

    fn r_squared_from(ss_res: T, ss_tot: T) -> T {
        if ss_tot == T::zero() {
            // All y values are identical
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Kernel Regression Diagnostics:")?;
        writeln!(f, "  MSE:          {:.6}", self.mse)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        if self.non_finite > 0 {
            writeln!(f, "  Non-finite:   {}", self.non_finite)?;
        }
        Ok(())
    }
}
