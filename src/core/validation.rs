//! Opt-in shape checks for kernel inputs.
//!
//! The kernels in [`crate::kernels`] trust their inputs. Callers that build
//! parameter tables dynamically can run these checks once, outside the
//! evaluation loop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("coordinate array has length {len}, expected {expected} (3 x {n_atoms} atoms)")]
    Coordinates { len: usize, expected: usize, n_atoms: usize },

    #[error("gradient buffer has length {len}, expected {expected}")]
    Gradient { len: usize, expected: usize },

    #[error("matrix `{name}` has length {len}, expected {n} x {n} = {expected}")]
    Matrix { name: &'static str, len: usize, n: usize, expected: usize },

    #[error("radius array has length {len}, expected one radius per atom ({n_atoms})")]
    Radii { len: usize, n_atoms: usize },

    #[error("{pairs} pairs but {lengths} target lengths")]
    PairLengths { pairs: usize, lengths: usize },

    #[error("pair {index} refers to atom {atom}, but there are only {n_atoms} atoms")]
    PairIndex { index: usize, atom: usize, n_atoms: usize },
}

pub fn check_coordinates(n_atoms: usize, coords: &[f64]) -> Result<(), ShapeError> {
    let expected = 3 * n_atoms;
    if coords.len() != expected {
        return Err(ShapeError::Coordinates { len: coords.len(), expected, n_atoms });
    }
    Ok(())
}

pub fn check_gradient(n_atoms: usize, gradient: &[f64]) -> Result<(), ShapeError> {
    let expected = 3 * n_atoms;
    if gradient.len() != expected {
        return Err(ShapeError::Gradient { len: gradient.len(), expected });
    }
    Ok(())
}

/// Checks that a row-major `n x n` matrix has exactly `n*n` entries.
pub fn check_matrix<T>(name: &'static str, n: usize, matrix: &[T]) -> Result<(), ShapeError> {
    let expected = n * n;
    if matrix.len() != expected {
        return Err(ShapeError::Matrix { name, len: matrix.len(), n, expected });
    }
    Ok(())
}

pub fn check_radii(n_atoms: usize, radii: &[f64]) -> Result<(), ShapeError> {
    if radii.len() != n_atoms {
        return Err(ShapeError::Radii { len: radii.len(), n_atoms });
    }
    Ok(())
}

/// Checks a pair list against its target lengths and the atom count.
/// Duplicate pairs are allowed.
pub fn check_pairs(n_atoms: usize, pairs: &[[usize; 2]], lengths: &[f64]) -> Result<(), ShapeError> {
    if pairs.len() != lengths.len() {
        return Err(ShapeError::PairLengths { pairs: pairs.len(), lengths: lengths.len() });
    }
    for (index, pair) in pairs.iter().enumerate() {
        if let Some(&atom) = pair.iter().find(|&&a| a >= n_atoms) {
            return Err(ShapeError::PairIndex { index, atom, n_atoms });
        }
    }
    Ok(())
}
