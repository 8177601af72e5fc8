use anyhow::{Context, Result};
use log::{debug, trace, warn};

use crate::core::domain::{ForceFieldParams, ForceFieldTables, TermWeights};
use crate::core::validation::{self, ShapeError};
use crate::engine::evaluator::{EvaluationResult, Evaluator};
use crate::kernels;

/// Weighted sum of the restraint terms over one set of parameter tables.
///
/// Tables are validated once in [`ToyForceField::new`]; evaluation then runs
/// the unchecked kernels.
#[derive(Debug, Clone)]
pub struct ToyForceField {
    tables: ForceFieldTables,
    params: ForceFieldParams,
}

impl ToyForceField {
    pub fn new(tables: ForceFieldTables, params: ForceFieldParams) -> Result<Self, ShapeError> {
        tables.validate()?;

        debug!(
            "force field: {} atoms, {} bonds, {} spans",
            tables.n_atoms,
            tables.bond_pairs.len(),
            tables.span_pairs.len()
        );
        let ff = Self { tables, params };
        ff.log_weights();
        Ok(ff)
    }

    pub fn tables(&self) -> &ForceFieldTables {
        &self.tables
    }

    pub fn params(&self) -> &ForceFieldParams {
        &self.params
    }

    pub fn weights(&self) -> TermWeights {
        self.params.weights
    }

    /// Swaps the term weights, e.g. when moving to the next build stage.
    pub fn set_weights(&mut self, weights: TermWeights) {
        self.params.weights = weights;
        self.log_weights();
    }

    fn log_weights(&self) {
        let w = &self.params.weights;
        if w.is_zero() {
            warn!("force field has no active terms; energy will be zero");
        } else {
            debug!("active weights: {:?} (hyper scale {})", w, self.params.hyper_scale);
        }
    }

    /// Total energy at `coords`, adding the gradient into `gradient` if given.
    ///
    /// `coords` must hold `3 * n_atoms` values; the buffer is not cleared.
    pub fn accumulate(&self, coords: &[f64], mut gradient: Option<&mut [f64]>) -> f64 {
        let t = &self.tables;
        let w = &self.params.weights;
        let n = t.n_atoms;
        let mut result = 0.0;

        if w.dm_quad > 0.0 {
            let e = kernels::dm_quad(
                n,
                coords,
                &t.dm_target,
                &t.dm_force,
                w.dm_quad,
                gradient.as_deref_mut(),
            );
            trace!("dm_quad = {}", e);
            result += e;
        }
        if w.dm_reci != 0.0 {
            let e = kernels::dm_reci(n, &t.radii, coords, &t.topology, w.dm_reci, gradient.as_deref_mut());
            trace!("dm_reci = {}", e);
            result += e;
        }
        if w.bond_quad != 0.0 {
            let e = kernels::bond_quad(
                n,
                coords,
                &t.bond_pairs,
                &t.bond_lengths,
                w.bond_quad,
                gradient.as_deref_mut(),
            );
            trace!("bond_quad = {}", e);
            result += e;
        }
        if w.span_quad != 0.0 {
            let e = kernels::bond_quad(
                n,
                coords,
                &t.span_pairs,
                &t.span_lengths,
                w.span_quad,
                gradient.as_deref_mut(),
            );
            trace!("span_quad = {}", e);
            result += e;
        }
        if w.bond_hyper != 0.0 {
            let e = kernels::bond_hyper(
                n,
                coords,
                &t.bond_pairs,
                &t.bond_lengths,
                self.params.hyper_scale,
                w.bond_hyper,
                gradient.as_deref_mut(),
            );
            trace!("bond_hyper = {}", e);
            result += e;
        }
        result
    }
}

impl Evaluator for ToyForceField {
    fn name(&self) -> &str {
        "toy force field"
    }

    fn evaluate(&self, coords: &[f64], with_gradient: bool) -> Result<EvaluationResult> {
        validation::check_coordinates(self.tables.n_atoms, coords)
            .context("Invalid coordinates for force field evaluation")?;

        if !with_gradient {
            return Ok(EvaluationResult {
                energy: self.accumulate(coords, None),
                gradient: None,
                gradient_norm: None,
            });
        }

        let mut gradient = vec![0.0; coords.len()];
        let energy = self.accumulate(coords, Some(&mut gradient));
        let norm = gradient.iter().map(|g| g * g).sum::<f64>().sqrt();

        Ok(EvaluationResult {
            energy,
            gradient: Some(gradient),
            gradient_norm: Some(norm),
        })
    }
}
