use crate::core::spatial::{add_grad, distance};

/// Quadratic restraint on an explicit list of bonded pairs.
///
/// Bond `b` joins `pairs[b]` and adds `amp * (d - lengths[b])^2`. Every
/// listed bond contributes; duplicates are counted twice. `n_atoms` only
/// sizes the debug shape checks.
pub fn bond_quad(
    n_atoms: usize,
    coords: &[f64],
    pairs: &[[usize; 2]],
    lengths: &[f64],
    amp: f64,
    mut gradient: Option<&mut [f64]>,
) -> f64 {
    debug_assert_eq!(coords.len(), 3 * n_atoms);
    debug_assert_eq!(pairs.len(), lengths.len());

    let mut result = 0.0;
    for (&[i, j], &length) in pairs.iter().zip(lengths) {
        let d = distance(coords, i, j);
        let dev = d - length;
        result += amp * dev * dev;

        if let Some(grad) = gradient.as_deref_mut() {
            add_grad(i, j, 2.0 * amp * dev / d, coords, grad);
        }
    }
    result
}

/// Hyperbolic-cosine restraint on bonded pairs.
///
/// Each bond adds `amp * (cosh(scale * (d - l)) - 1)`. Near the target this
/// behaves like a quadratic well with curvature `amp * scale^2`; far from it
/// the restoring force grows exponentially.
pub fn bond_hyper(
    n_atoms: usize,
    coords: &[f64],
    pairs: &[[usize; 2]],
    lengths: &[f64],
    scale: f64,
    amp: f64,
    mut gradient: Option<&mut [f64]>,
) -> f64 {
    debug_assert_eq!(coords.len(), 3 * n_atoms);
    debug_assert_eq!(pairs.len(), lengths.len());

    let mut result = 0.0;
    for (&[i, j], &length) in pairs.iter().zip(lengths) {
        let d = distance(coords, i, j);
        let arg = scale * (d - length);
        result += amp * (arg.cosh() - 1.0);

        if let Some(grad) = gradient.as_deref_mut() {
            add_grad(i, j, amp * scale * arg.sinh() / d, coords, grad);
        }
    }
    result
}
