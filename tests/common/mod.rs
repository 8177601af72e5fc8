#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use restraint_ff::ForceFieldTables;

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Flat coordinates for `n` atoms, uniform in `[-half_width, half_width)^3`.
pub fn random_coords<R: Rng>(rng: &mut R, n: usize, half_width: f64) -> Vec<f64> {
    (0..3 * n).map(|_| rng.gen_range(-half_width..half_width)).collect()
}

/// Symmetric `n x n` matrix with a zero diagonal.
pub fn symmetric_matrix<T: Copy + Default>(n: usize, mut entry: impl FnMut(usize, usize) -> T) -> Vec<T> {
    let mut m = vec![T::default(); n * n];
    for i in 0..n {
        for j in 0..i {
            let v = entry(i, j);
            m[i * n + j] = v;
            m[j * n + i] = v;
        }
    }
    m
}

pub fn axis_sums(gradient: &[f64]) -> [f64; 3] {
    let mut sums = [0.0; 3];
    for (k, g) in gradient.iter().enumerate() {
        sums[k % 3] += g;
    }
    sums
}

/// Moves atom `i` to slot `perm[i]`.
pub fn permute_coords(coords: &[f64], perm: &[usize]) -> Vec<f64> {
    let mut out = vec![0.0; coords.len()];
    for (i, &p) in perm.iter().enumerate() {
        out[3 * p..3 * p + 3].copy_from_slice(&coords[3 * i..3 * i + 3]);
    }
    out
}

pub fn permute_matrix<T: Copy + Default>(matrix: &[T], perm: &[usize]) -> Vec<T> {
    let n = perm.len();
    let mut out = vec![T::default(); n * n];
    for i in 0..n {
        for j in 0..n {
            out[perm[i] * n + perm[j]] = matrix[i * n + j];
        }
    }
    out
}

pub fn permute_pairs(pairs: &[[usize; 2]], perm: &[usize]) -> Vec<[usize; 2]> {
    pairs.iter().map(|&[i, j]| [perm[i], perm[j]]).collect()
}

/// A bent four-atom chain 0-1-2-3 with graph-distance tables.
pub fn chain_tables() -> ForceFieldTables {
    let n = 4;
    let topology = symmetric_matrix(n, |i, j| (i - j) as i32);
    let dm_target = symmetric_matrix(n, |i, j| {
        let t = (i - j) as f64;
        t * t
    });
    let dm_force = symmetric_matrix(n, |i, j| ((i - j) as f64).powi(-3));

    ForceFieldTables {
        n_atoms: n,
        dm_target,
        dm_force,
        topology,
        // unit radius sums keep the repulsion gradient exact
        radii: vec![0.5; n],
        bond_pairs: vec![[1, 0], [2, 1], [3, 2]],
        bond_lengths: vec![1.5, 1.4, 1.5],
        span_pairs: vec![[2, 0], [3, 1]],
        span_lengths: vec![2.5, 2.5],
    }
}

/// Distorted coordinates for [`chain_tables`]. Atoms 1 and 3 overlap, so the
/// repulsion term is active.
pub fn chain_coords() -> Vec<f64> {
    vec![
        0.0, 0.0, 0.0, //
        1.3, 0.2, -0.1, //
        1.9, 1.4, 0.1, //
        1.4, 0.8, 0.5,
    ]
}
