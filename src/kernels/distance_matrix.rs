use crate::core::spatial::{add_grad, distance};

/// Quadratic restraint on every pair of a target distance matrix.
///
/// Visits the lower triangle (`j < i`) of the row-major `n x n` matrices
/// `target` and `force`. A pair with `target <= 0` is unrestrained and
/// contributes nothing. Each restrained pair adds `amp * k * (d - d0)^2`.
///
/// When `gradient` is given, `dE/dr` is added into it. A restrained pair with
/// coincident atoms yields a non-finite gradient.
pub fn dm_quad(
    n: usize,
    coords: &[f64],
    target: &[f64],
    force: &[f64],
    amp: f64,
    mut gradient: Option<&mut [f64]>,
) -> f64 {
    debug_assert_eq!(coords.len(), 3 * n);
    debug_assert_eq!(target.len(), n * n);
    debug_assert_eq!(force.len(), n * n);

    let mut result = 0.0;
    for i in 0..n {
        for j in 0..i {
            let d0 = target[i * n + j];
            if d0 <= 0.0 {
                continue;
            }
            let k = force[i * n + j];

            let d = distance(coords, i, j);
            let dev = d - d0;
            result += amp * k * dev * dev;

            if let Some(grad) = gradient.as_deref_mut() {
                add_grad(i, j, 2.0 * amp * k * dev / d, coords, grad);
            }
        }
    }
    result
}

/// Soft steric repulsion between non-bonded atoms.
///
/// For each lower-triangle pair with `topology > 1` that sits closer than the
/// sum of its radii `r0`, the normalized distance `x = d / r0` contributes
/// `amp * (x - 1)^2 / (x * t)` where `t` is the topology entry. The penalty
/// vanishes at `x = 1` and grows as the atoms overlap.
///
/// The gradient factor is `amp * (1 - 1/x^2) / (r0 * x * t)`. It carries a
/// single power of `r0` and coincides with the exact derivative of the energy
/// only when `r0 == 1`.
pub fn dm_reci(
    n: usize,
    radii: &[f64],
    coords: &[f64],
    topology: &[i32],
    amp: f64,
    mut gradient: Option<&mut [f64]>,
) -> f64 {
    debug_assert_eq!(coords.len(), 3 * n);
    debug_assert_eq!(radii.len(), n);
    debug_assert_eq!(topology.len(), n * n);

    let mut result = 0.0;
    for i in 0..n {
        for j in 0..i {
            let t = topology[i * n + j];
            if t <= 1 {
                continue;
            }
            let t = f64::from(t);

            let d = distance(coords, i, j);
            let r0 = radii[i] + radii[j];
            if d >= r0 {
                continue;
            }

            let x = d / r0;
            result += amp * (x - 1.0) * (x - 1.0) / (x * t);

            if let Some(grad) = gradient.as_deref_mut() {
                add_grad(i, j, amp * (1.0 - 1.0 / (x * x)) / (r0 * x * t), coords, grad);
            }
        }
    }
    result
}
