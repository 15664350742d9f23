//! Cohen's d effect size with axis-aware reduction
//!
//! Cohen's d is a standardized effect size measure that expresses the
//! difference between two group means in terms of the pooled standard
//! deviation. This implementation reduces along a configurable axis of
//! n-dimensional input, handles missing data under a configurable NaN
//! policy, and can apply the Hedges' g small-sample bias correction.

use crate::error::{Error, Result};
use crate::types::{Alternative, NanPolicy};
use crate::{reduce, validate};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, Zip};
use num_traits::ToPrimitive;

/// Cohen's d effect size estimator
///
/// The two-sample statistic is calculated as:
/// d = (mean(x) - mean(y)) / s_pooled
///
/// where s_pooled is the variance-weighted combination of both groups'
/// standard deviations, or the standard deviation of `x` alone in unpooled
/// mode. With one sample, d = mean(x) / std(x); in paired mode the
/// one-sample formula is applied to the elementwise differences.
///
/// Degenerate slices (zero variance, empty after NaN omission, fewer
/// observations than `ddof`) produce NaN in the result, never an error.
#[derive(Debug, Clone, Copy)]
pub struct CohenD {
    /// Matched-pair difference mode instead of independent groups
    paired: bool,
    /// Apply the Hedges' g small-sample bias correction
    bias_correction: bool,
    /// Reduction axis; `None` flattens the whole array
    axis: Option<isize>,
    /// Missing-data handling
    nan_policy: NanPolicy,
    /// Delta degrees of freedom for variance estimates
    ddof: usize,
    /// Retain the reduced axis as a size-1 dimension
    keepdims: bool,
    /// Accepted and validated, currently inert
    alternative: Alternative,
    /// Pooled vs x-reference standard deviation
    pooled: bool,
}

impl CohenD {
    /// Create a new estimator with the default configuration: independent
    /// groups, no bias correction, flattened reduction, NaN propagation,
    /// `ddof = 1`, pooled standard deviation.
    pub fn new() -> Self {
        Self {
            paired: false,
            bias_correction: false,
            axis: None,
            nan_policy: NanPolicy::Propagate,
            ddof: 1,
            keepdims: false,
            alternative: Alternative::TwoSided,
            pooled: true,
        }
    }

    /// Treat the two samples as matched pairs
    pub fn with_paired(mut self) -> Self {
        self.paired = true;
        self
    }

    /// Apply the Hedges' g bias correction. The degrees of freedom are
    /// n_x + n_y - 2 for independent groups and n - 1 for the one-sample
    /// and paired modes.
    pub fn with_bias_correction(mut self) -> Self {
        self.bias_correction = true;
        self
    }

    /// Reduce along the given axis; negative values count from the end
    pub fn with_axis(mut self, axis: isize) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the missing-data policy
    pub fn with_nan_policy(mut self, nan_policy: NanPolicy) -> Self {
        self.nan_policy = nan_policy;
        self
    }

    /// Set the delta degrees of freedom for variance estimates
    pub fn with_ddof(mut self, ddof: usize) -> Self {
        self.ddof = ddof;
        self
    }

    /// Retain the reduced axis as a size-1 dimension in the result
    pub fn with_keepdims(mut self) -> Self {
        self.keepdims = true;
        self
    }

    /// Set the alternative hypothesis direction (validated, currently inert)
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    /// Use the standard deviation of `x` alone instead of pooling
    pub fn unpooled(mut self) -> Self {
        self.pooled = false;
        self
    }

    /// Compute the two-sample effect size.
    ///
    /// `x` and `y` may have any numeric element type; elements are promoted
    /// to `f64` before validation. In paired mode the shapes must be
    /// identical; otherwise, when an axis is given, the shapes must be
    /// broadcast-compatible and of equal rank. The result is 0-dimensional
    /// when `axis` is `None` and `keepdims` is off.
    pub fn compute<Ax, Ay, Sx, Dx, Sy, Dy>(
        &self,
        x: &ArrayBase<Sx, Dx>,
        y: &ArrayBase<Sy, Dy>,
    ) -> Result<ArrayD<f64>>
    where
        Ax: ToPrimitive + Copy,
        Ay: ToPrimitive + Copy,
        Sx: Data<Elem = Ax>,
        Sy: Data<Elem = Ay>,
        Dx: Dimension,
        Dy: Dimension,
    {
        let x = validate::to_float_array(x, "x")?;
        let y = validate::to_float_array(y, "y")?;
        self.compute_impl(x, Some(y))
    }

    /// Compute the one-sample effect size of `x` against zero:
    /// d = mean(x) / std(x).
    pub fn compute_one_sample<A, S, D>(&self, x: &ArrayBase<S, D>) -> Result<ArrayD<f64>>
    where
        A: ToPrimitive + Copy,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let x = validate::to_float_array(x, "x")?;
        self.compute_impl(x, None)
    }

    fn compute_impl(&self, x: ArrayD<f64>, y: Option<ArrayD<f64>>) -> Result<ArrayD<f64>> {
        validate::ensure_finite(&x, "x")?;
        if let Some(y) = &y {
            validate::ensure_finite(y, "y")?;
        }
        if self.nan_policy == NanPolicy::Raise {
            validate::ensure_no_nan(&x, "x")?;
            if let Some(y) = &y {
                validate::ensure_no_nan(y, "y")?;
            }
        }

        let axis = match self.axis {
            Some(ax) => {
                if let Some(y) = &y {
                    if y.ndim() != x.ndim() {
                        return Err(Error::ShapeMismatch(format!(
                            "x and y must have the same number of dimensions \
                             when an axis is given, got {} and {}",
                            x.ndim(),
                            y.ndim()
                        )));
                    }
                }
                Some(validate::normalize_axis(ax, x.ndim())?)
            }
            None => None,
        };

        let skip_nan = self.nan_policy == NanPolicy::Omit;
        let full_ndim = x.ndim().max(y.as_ref().map_or(0, |y| y.ndim()));

        let d = match &y {
            None => {
                if self.paired {
                    return Err(Error::InvalidParameter(
                        "paired mode requires both x and y samples".to_string(),
                    ));
                }
                let d = self.standardized_mean(&x, axis, skip_nan);
                if self.bias_correction {
                    let df = reduce::sample_count(&x, axis, skip_nan) - 1.0;
                    bias_corrected(d, &df)
                } else {
                    d
                }
            }
            Some(y) if self.paired => {
                if x.shape() != y.shape() {
                    return Err(Error::ShapeMismatch(format!(
                        "paired samples require identical shapes, got {:?} and {:?}",
                        x.shape(),
                        y.shape()
                    )));
                }
                // A NaN on either side poisons the pair's difference, so the
                // NaN-skipping reduction drops matched pairs as a unit and
                // the pair count excludes them.
                let diff = &x - y;
                let d = self.standardized_mean(&diff, axis, skip_nan);
                if self.bias_correction {
                    let df = reduce::sample_count(&diff, axis, skip_nan) - 1.0;
                    bias_corrected(d, &df)
                } else {
                    d
                }
            }
            Some(y) => {
                if axis.is_some() {
                    validate::broadcast_shape(x.shape(), y.shape())?;
                }
                self.two_sample(&x, y, axis, skip_nan)?
            }
        };

        Ok(reduce::restore_dims(d, axis, full_ndim, self.keepdims))
    }

    /// mean / std along an axis, with zero spread reported as NaN.
    fn standardized_mean(
        &self,
        a: &ArrayD<f64>,
        axis: Option<usize>,
        skip_nan: bool,
    ) -> ArrayD<f64> {
        let mean = reduce::mean(a, axis, skip_nan);
        let var = reduce::variance(a, axis, self.ddof, skip_nan);
        Zip::from(&mean)
            .and(&var)
            .map_collect(|&m, &v| if v == 0.0 { f64::NAN } else { m / v.sqrt() })
    }

    fn two_sample(
        &self,
        x: &ArrayD<f64>,
        y: &ArrayD<f64>,
        axis: Option<usize>,
        skip_nan: bool,
    ) -> Result<ArrayD<f64>> {
        let mean_x = reduce::mean(x, axis, skip_nan);
        let mean_y = reduce::mean(y, axis, skip_nan);

        // Reduced statistics from differently-shaped inputs are combined
        // over their common broadcast shape.
        let shape = validate::broadcast_shape(mean_x.shape(), mean_y.shape())?;
        let mean_x = validate::broadcast_to(&mean_x, &shape)?;
        let mean_y = validate::broadcast_to(&mean_y, &shape)?;

        let n_x = validate::broadcast_to(&reduce::sample_count(x, axis, skip_nan), &shape)?;
        let n_y = validate::broadcast_to(&reduce::sample_count(y, axis, skip_nan), &shape)?;

        let std_used = if self.pooled {
            let var_x =
                validate::broadcast_to(&reduce::variance(x, axis, self.ddof, skip_nan), &shape)?;
            let var_y =
                validate::broadcast_to(&reduce::variance(y, axis, self.ddof, skip_nan), &shape)?;
            let weighted = (&n_x - 1.0) * &var_x + (&n_y - 1.0) * &var_y;
            let df = &n_x + &n_y - 2.0;
            Zip::from(&weighted)
                .and(&df)
                .map_collect(|&w, &df| if df > 0.0 { (w / df).sqrt() } else { f64::NAN })
        } else {
            // The first group is the defined reference for the unpooled mode
            validate::broadcast_to(&reduce::variance(x, axis, self.ddof, skip_nan), &shape)?
                .mapv(f64::sqrt)
        };

        let mut d = Zip::from(&mean_x)
            .and(&mean_y)
            .and(&std_used)
            .map_collect(|&mx, &my, &s| if s == 0.0 { f64::NAN } else { (mx - my) / s });

        if self.bias_correction {
            let df = &n_x + &n_y - 2.0;
            d = bias_corrected(d, &df);
        }

        Ok(d)
    }
}

/// Multiply by the Hedges correction factor 1 - 3/(4*df - 1). Undefined
/// degrees of freedom (df <= 0) yield NaN rather than a propagated inf.
fn bias_corrected(d: ArrayD<f64>, df: &ArrayD<f64>) -> ArrayD<f64> {
    Zip::from(&d).and(df).map_collect(|&d, &df| {
        if df > 0.0 {
            d * (1.0 - 3.0 / (4.0 * df - 1.0))
        } else {
            f64::NAN
        }
    })
}

impl Default for CohenD {
    fn default() -> Self {
        Self::new()
    }
}
