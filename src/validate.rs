//! Input normalization and validation
//!
//! All validation runs before any arithmetic. Inputs are first promoted to
//! `f64` arrays, then scanned for infinite values (always an error, whatever
//! the NaN policy) and for NaN under the raise policy. Shape reconciliation
//! follows standard broadcasting rules: shapes align from the trailing
//! dimension and sizes must match or be 1.

use crate::error::{Error, Result};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};
use num_traits::ToPrimitive;

/// Convert a numeric array of any element type into an owned `f64` array.
///
/// Integer elements are promoted to floating point. An element that cannot
/// be represented as `f64` fails with a `NonNumeric` error naming the input.
pub(crate) fn to_float_array<A, S, D>(a: &ArrayBase<S, D>, name: &str) -> Result<ArrayD<f64>>
where
    A: ToPrimitive + Copy,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut elems = Vec::with_capacity(a.len());
    for &v in a.iter() {
        match v.to_f64() {
            Some(f) => elems.push(f),
            None => {
                return Err(Error::NonNumeric(format!(
                    "input {name} contains an element of type {} not representable as f64",
                    std::any::type_name::<A>()
                )))
            }
        }
    }
    // iter() yields elements in logical order, so this cannot fail
    ArrayD::from_shape_vec(IxDyn(a.shape()), elems)
        .map_err(|e| Error::ShapeMismatch(e.to_string()))
}

/// Reject any infinite value, independent of the NaN policy.
pub(crate) fn ensure_finite(a: &ArrayD<f64>, name: &str) -> Result<()> {
    if a.iter().any(|v| v.is_infinite()) {
        return Err(Error::non_finite(name));
    }
    Ok(())
}

/// Reject any NaN value (raise policy).
pub(crate) fn ensure_no_nan(a: &ArrayD<f64>, name: &str) -> Result<()> {
    if a.iter().any(|v| v.is_nan()) {
        return Err(Error::nan_input(name));
    }
    Ok(())
}

/// Normalize a possibly negative axis index against `ndim`.
pub(crate) fn normalize_axis(axis: isize, ndim: usize) -> Result<usize> {
    let resolved = if axis < 0 { axis + ndim as isize } else { axis };
    if resolved < 0 || resolved as usize >= ndim {
        return Err(Error::AxisOutOfBounds { axis, ndim });
    }
    Ok(resolved as usize)
}

/// Compute the broadcast shape of two shapes, or fail if they are
/// incompatible. Alignment starts from the trailing dimension; at each
/// position the sizes must be equal or one of them must be 1.
pub(crate) fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut out = vec![0; ndim];
    for i in 0..ndim {
        let da = if i < ndim - a.len() { 1 } else { a[i - (ndim - a.len())] };
        let db = if i < ndim - b.len() { 1 } else { b[i - (ndim - b.len())] };
        out[i] = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return Err(Error::incompatible_shapes(a, b));
        };
    }
    Ok(out)
}

/// Broadcast an array to the given shape, taking ownership of the result.
pub(crate) fn broadcast_to(a: &ArrayD<f64>, shape: &[usize]) -> Result<ArrayD<f64>> {
    a.broadcast(IxDyn(shape))
        .map(|view| view.to_owned())
        .ok_or_else(|| Error::incompatible_shapes(a.shape(), shape))
}
