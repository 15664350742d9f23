//! Effect size computation for n-dimensional data
//!
//! This crate provides Cohen's d, the standardized mean difference between
//! two samples (or between one sample and zero), and its bias-corrected
//! Hedges' g variant. The statistic is a pure, stateless numeric transform:
//! inputs are validated up front, missing data is handled under a
//! configurable NaN policy, and reduction is axis-aware over n-dimensional
//! arrays.
//!
//! # Overview
//!
//! Effect sizes quantify the practical magnitude of a difference between
//! groups, independent of sample size. Cohen's d expresses the mean
//! difference in units of (pooled) standard deviation:
//!
//! - *Two-sample*: d = (mean(x) - mean(y)) / s, where s is the pooled
//!   standard deviation or, in unpooled mode, the standard deviation of `x`.
//! - *One-sample*: d = mean(x) / std(x).
//! - *Paired*: the one-sample formula applied to the elementwise
//!   differences x - y.
//! - *Hedges' g*: d multiplied by the small-sample correction factor
//!   1 - 3/(4·df - 1), with df = n_x + n_y - 2 for independent groups and
//!   df = n - 1 for the one-sample and paired modes.
//!
//! Degenerate slices (zero variance, empty after NaN omission) yield NaN in
//! the result rather than an error, so batch reductions over many slices
//! are never aborted by one bad slice. Validation failures (non-numeric
//! input, infinite values, incompatible shapes, out-of-range axis, NaN
//! under the raise policy) abort the whole call before any arithmetic.
//!
//! # Examples
//!
//! Two independent samples, scalar result:
//!
//! ```rust
//! use effect_size::cohens_d;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [3.0, 4.0, 5.0, 6.0, 7.0];
//! let d = cohens_d(&x, &y).unwrap();
//! assert!(d < 0.0); // x sits below y
//! ```
//!
//! Axis-aware reduction with the builder:
//!
//! ```rust
//! use effect_size::{CohenD, NanPolicy};
//! use ndarray::array;
//!
//! let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
//! let y = array![[2.0, 1.0], [4.0, 3.0], [6.0, 5.0]];
//!
//! let d = CohenD::new()
//!     .with_axis(0)
//!     .with_nan_policy(NanPolicy::Omit)
//!     .compute(&x, &y)
//!     .unwrap();
//! assert_eq!(d.shape(), &[2]);
//! ```
//!
//! Interpreting a magnitude with Cohen's conventions:
//!
//! ```rust
//! use effect_size::EffectSizeInterpretation;
//!
//! let interp = EffectSizeInterpretation::from_d(0.6);
//! assert_eq!(interp.to_string(), "medium");
//! ```

mod cohen_d;
mod error;
mod reduce;
mod types;
mod validate;

// Re-exports
pub use cohen_d::CohenD;
pub use error::{Error, Result};
pub use types::{Alternative, EffectSizeInterpretation, NanPolicy};

use ndarray::{ArrayD, ArrayView1};

fn into_scalar(d: ArrayD<f64>) -> f64 {
    d.first().copied().unwrap_or(f64::NAN)
}

/// Cohen's d for two independent samples with the default configuration
/// (pooled standard deviation, `ddof = 1`, NaN propagation).
pub fn cohens_d(x: &[f64], y: &[f64]) -> Result<f64> {
    let d = CohenD::new().compute(&ArrayView1::from(x), &ArrayView1::from(y))?;
    Ok(into_scalar(d))
}

/// One-sample Cohen's d of `x` against zero: mean(x) / std(x).
pub fn cohens_d_one_sample(x: &[f64]) -> Result<f64> {
    let d = CohenD::new().compute_one_sample(&ArrayView1::from(x))?;
    Ok(into_scalar(d))
}

/// Cohen's d for matched pairs: the one-sample statistic of the
/// elementwise differences.
pub fn cohens_d_paired(x: &[f64], y: &[f64]) -> Result<f64> {
    let d = CohenD::new()
        .with_paired()
        .compute(&ArrayView1::from(x), &ArrayView1::from(y))?;
    Ok(into_scalar(d))
}

/// Hedges' g: bias-corrected Cohen's d for two independent samples.
pub fn hedges_g(x: &[f64], y: &[f64]) -> Result<f64> {
    let d = CohenD::new()
        .with_bias_correction()
        .compute(&ArrayView1::from(x), &ArrayView1::from(y))?;
    Ok(into_scalar(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_scalar_convenience_functions() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 3.0, 4.0, 5.0, 6.0];

        let d = cohens_d(&x, &y).unwrap();
        assert_abs_diff_eq!(d, -1.0 / 2.5f64.sqrt(), epsilon = 1e-12);

        let d1 = cohens_d_one_sample(&x).unwrap();
        assert_abs_diff_eq!(d1, 3.0 / 2.5f64.sqrt(), epsilon = 1e-12);

        let g = hedges_g(&x, &y).unwrap();
        assert_abs_diff_eq!(g, d * (1.0 - 3.0 / 31.0), epsilon = 1e-12);

        // Constant pairwise shift: differences have zero spread
        let dp = cohens_d_paired(&x, &y).unwrap();
        assert!(dp.is_nan());
    }
}
