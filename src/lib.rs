//! Energies and analytic gradients for a handful of empirical restraint
//! terms used to build and refine molecular geometries.
//!
//! The [`kernels`] are allocation-free functions over flat atom-major
//! coordinate arrays. [`engine::toyff::ToyForceField`] combines them with
//! per-term weights behind the [`engine::evaluator::Evaluator`] trait.

pub mod analysis;
pub mod core;
pub mod engine;
pub mod kernels;

pub use crate::core::domain::{ForceFieldParams, ForceFieldTables, GeometryStage, TermWeights};
pub use crate::core::validation::ShapeError;
pub use crate::engine::evaluator::{EvaluationResult, Evaluator};
pub use crate::engine::toyff::ToyForceField;
