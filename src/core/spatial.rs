use nalgebra::Vector3;

/// Returns the 3-component coordinate block of atom `i`.
/// Layout is atom-major: `coords[3*i..3*i + 3]`.
#[inline(always)]
pub fn atom(coords: &[f64], i: usize) -> &[f64] {
    &coords[3 * i..3 * i + 3]
}

/// Cartesian displacement `a - b` between two coordinate blocks.
///
/// No minimum image convention is applied: periodic wrapping, if any, is the
/// caller's business.
#[inline(always)]
pub fn calc_delta(a: &[f64], b: &[f64]) -> Vector3<f64> {
    Vector3::new(a[0] - b[0], a[1] - b[1], a[2] - b[2])
}

/// Euclidean distance between atoms `i` and `j`.
#[inline(always)]
pub fn distance(coords: &[f64], i: usize, j: usize) -> f64 {
    calc_delta(atom(coords, i), atom(coords, j)).norm()
}

/// Adds the pair contribution `s * (r_i - r_j)` to atom `i` and subtracts it
/// from atom `j`.
///
/// Every pair term expresses its gradient through this routine with its own
/// scalar factor `s = (dE/dd) / d`, so the per-axis sum over all atoms stays
/// exactly zero.
///
/// **Invariant**: only adds into `gradient`, never overwrites.
#[inline(always)]
pub fn add_grad(i: usize, j: usize, s: f64, coords: &[f64], gradient: &mut [f64]) {
    let delta = calc_delta(atom(coords, i), atom(coords, j));
    for axis in 0..3 {
        let g = s * delta[axis];
        gradient[3 * i + axis] += g;
        gradient[3 * j + axis] -= g;
    }
}
