//! Axis-aware reductions with NaN-propagating and NaN-skipping variants
//!
//! Every reduction maps each one-dimensional lane along the requested axis to
//! a scalar, or the whole flattened array to a single scalar when no axis is
//! given. Degenerate lanes (empty, or with fewer observations than `ddof`
//! leaves degrees of freedom for) yield NaN rather than an error, so batch
//! computations over many slices are never aborted by one bad slice.

use ndarray::{arr0, ArrayD, ArrayView1, Axis};

/// Apply a lane-to-scalar reduction along `axis`, or over the flattened
/// array when `axis` is `None` (producing a 0-dimensional result).
fn reduce<F>(a: &ArrayD<f64>, axis: Option<usize>, f: F) -> ArrayD<f64>
where
    F: Fn(ArrayView1<'_, f64>) -> f64,
{
    match axis {
        Some(ax) => a.map_axis(Axis(ax), |lane| f(lane)),
        None => {
            let flat: Vec<f64> = a.iter().copied().collect();
            arr0(f(ArrayView1::from(flat.as_slice()))).into_dyn()
        }
    }
}

/// Mean along an axis. NaN-skipping when `skip_nan` is set, NaN-propagating
/// otherwise.
pub(crate) fn mean(a: &ArrayD<f64>, axis: Option<usize>, skip_nan: bool) -> ArrayD<f64> {
    if skip_nan {
        reduce(a, axis, lane_nanmean)
    } else {
        reduce(a, axis, lane_mean)
    }
}

/// Variance along an axis with `n - ddof` in the divisor.
pub(crate) fn variance(
    a: &ArrayD<f64>,
    axis: Option<usize>,
    ddof: usize,
    skip_nan: bool,
) -> ArrayD<f64> {
    if skip_nan {
        reduce(a, axis, |lane| lane_nanvar(lane, ddof))
    } else {
        reduce(a, axis, |lane| lane_var(lane, ddof))
    }
}

/// Number of observations along an axis, as f64 for downstream arithmetic.
/// Counts non-NaN entries only when `skip_nan` is set.
pub(crate) fn sample_count(a: &ArrayD<f64>, axis: Option<usize>, skip_nan: bool) -> ArrayD<f64> {
    if skip_nan {
        reduce(a, axis, |lane| {
            lane.iter().filter(|v| !v.is_nan()).count() as f64
        })
    } else {
        reduce(a, axis, |lane| lane.len() as f64)
    }
}

/// Restore the reduced axis as a size-1 dimension when `keepdims` is
/// requested. For a flattened reduction the result has shape `[1; ndim]`.
pub(crate) fn restore_dims(
    d: ArrayD<f64>,
    axis: Option<usize>,
    ndim: usize,
    keepdims: bool,
) -> ArrayD<f64> {
    if !keepdims {
        return d;
    }
    match axis {
        Some(ax) => d.insert_axis(Axis(ax)),
        None => {
            let v = d.first().copied().unwrap_or(f64::NAN);
            ArrayD::from_elem(vec![1; ndim], v)
        }
    }
}

fn lane_mean(lane: ArrayView1<'_, f64>) -> f64 {
    let n = lane.len();
    if n == 0 {
        return f64::NAN;
    }
    lane.sum() / n as f64
}

fn lane_nanmean(lane: ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &v in lane.iter() {
        if !v.is_nan() {
            sum += v;
            n += 1;
        }
    }
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

fn lane_var(lane: ArrayView1<'_, f64>, ddof: usize) -> f64 {
    let n = lane.len();
    if n == 0 || n <= ddof {
        return f64::NAN;
    }
    let mean = lane.sum() / n as f64;
    let ss: f64 = lane.iter().map(|&v| (v - mean).powi(2)).sum();
    ss / (n - ddof) as f64
}

fn lane_nanvar(lane: ArrayView1<'_, f64>, ddof: usize) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &v in lane.iter() {
        if !v.is_nan() {
            sum += v;
            n += 1;
        }
    }
    if n == 0 || n <= ddof {
        return f64::NAN;
    }
    let mean = sum / n as f64;
    let ss: f64 = lane
        .iter()
        .filter(|v| !v.is_nan())
        .map(|&v| (v - mean).powi(2))
        .sum();
    ss / (n - ddof) as f64
}
