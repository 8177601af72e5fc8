use serde::{Deserialize, Serialize};

use crate::core::validation::{self, ShapeError};

// --- Constants ---

/// Steepness of the cosh bond restraint used by the composite force field.
pub const DEFAULT_HYPER_SCALE: f64 = 5.0;

// --- Parameter Tables ---

/// Prebuilt parameter tables for one system.
///
/// Matrices are row-major `n_atoms x n_atoms` and addressed `[i * n + j]`;
/// only the lower triangle (`j < i`) is read. Building these from a
/// molecular graph is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceFieldTables {
    pub n_atoms: usize,

    /// Target distances. Entries `<= 0` switch the pair off.
    pub dm_target: Vec<f64>,
    /// Force constants matching `dm_target`.
    pub dm_force: Vec<f64>,

    /// Topological separation; entries `<= 1` are excluded from repulsion.
    pub topology: Vec<i32>,
    pub radii: Vec<f64>,

    pub bond_pairs: Vec<[usize; 2]>,
    pub bond_lengths: Vec<f64>,

    /// 1-3 pairs spanning a bending angle, restrained like bonds.
    #[serde(default)]
    pub span_pairs: Vec<[usize; 2]>,
    #[serde(default)]
    pub span_lengths: Vec<f64>,
}

impl ForceFieldTables {
    /// Parses tables from a JSON document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Runs every shape check against these tables.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let n = self.n_atoms;
        validation::check_matrix("dm_target", n, &self.dm_target)?;
        validation::check_matrix("dm_force", n, &self.dm_force)?;
        validation::check_matrix("topology", n, &self.topology)?;
        validation::check_radii(n, &self.radii)?;
        validation::check_pairs(n, &self.bond_pairs, &self.bond_lengths)?;
        validation::check_pairs(n, &self.span_pairs, &self.span_lengths)?;
        Ok(())
    }
}

// --- Configuration Types ---

/// Stages of a coarse-to-fine geometry build. Each stage switches on a
/// different mix of terms (see [`TermWeights::for_stage`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeometryStage {
    /// Distance-matrix restraints only.
    GraphOnly,
    /// Distance-matrix restraints plus soft repulsion.
    GraphRepulsion,
    /// Bond lengths plus weak repulsion.
    BondsRepulsion,
    /// Bond lengths (cosh), angle spans and weak repulsion.
    BondsAnglesRepulsion,
}

/// Amplitude per term. A zero weight disables the term entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermWeights {
    pub dm_quad: f64,
    pub dm_reci: f64,
    pub bond_quad: f64,
    pub span_quad: f64,
    pub bond_hyper: f64,
}

impl TermWeights {
    pub fn for_stage(stage: GeometryStage) -> Self {
        match stage {
            GeometryStage::GraphOnly => Self { dm_quad: 1.0, ..Default::default() },
            GeometryStage::GraphRepulsion => Self {
                dm_quad: 1.0,
                dm_reci: 1.0,
                ..Default::default()
            },
            GeometryStage::BondsRepulsion => Self {
                dm_reci: 0.2,
                bond_quad: 1.0,
                ..Default::default()
            },
            GeometryStage::BondsAnglesRepulsion => Self {
                dm_reci: 0.2,
                span_quad: 1.0,
                bond_hyper: 1.0,
                ..Default::default()
            },
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dm_quad == 0.0
            && self.dm_reci == 0.0
            && self.bond_quad == 0.0
            && self.span_quad == 0.0
            && self.bond_hyper == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceFieldParams {
    pub weights: TermWeights,
    /// Steepness passed to the cosh bond term.
    pub hyper_scale: f64,
}

impl Default for ForceFieldParams {
    fn default() -> Self {
        Self {
            weights: TermWeights::default(),
            hyper_scale: DEFAULT_HYPER_SCALE,
        }
    }
}

impl ForceFieldParams {
    pub fn for_stage(stage: GeometryStage) -> Self {
        Self {
            weights: TermWeights::for_stage(stage),
            ..Default::default()
        }
    }

    /// Parses parameters from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
