//! Finite-difference helpers for checking analytic gradients.

/// Central-difference gradient of `value_fn` at `point`.
///
/// Each component is perturbed by `±step` in turn, so this costs
/// `2 * point.len()` evaluations.
pub fn central_gradient(step: f64, point: &[f64], mut value_fn: impl FnMut(&[f64]) -> f64) -> Vec<f64> {
    let mut x = point.to_vec();
    let mut out = Vec::with_capacity(point.len());
    for k in 0..point.len() {
        let orig = x[k];
        x[k] = orig + step;
        let plus = value_fn(&x);
        x[k] = orig - step;
        let minus = value_fn(&x);
        x[k] = orig;
        out.push((plus - minus) / (2.0 * step));
    }
    out
}

/// Largest absolute value in `values`, or NaN if any entry is NaN.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).fold(0.0, nan_max)
}

/// Largest absolute componentwise difference between two equally long slices.
///
/// A NaN in either slice makes the result NaN, so tolerance checks of the
/// form `dev < tol` fail.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_deviation(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, nan_max)
}

// `f64::max` drops NaN operands
fn nan_max(m: f64, d: f64) -> f64 {
    if m.is_nan() || d.is_nan() { f64::NAN } else { m.max(d) }
}
