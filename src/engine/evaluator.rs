use anyhow::Result;

/// The result of a single energy evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Total energy of all active terms.
    pub energy: f64,
    /// Flat atom-major gradient, present when it was requested.
    pub gradient: Option<Vec<f64>>,
    /// Euclidean norm of `gradient`. Useful for convergence checks.
    pub gradient_norm: Option<f64>,
}

/// A generic interface for cost functions driven by an external optimizer.
/// Implementations must be Thread-Safe (Sync).
pub trait Evaluator: Send + Sync {
    /// Evaluates the energy at `coords`, and the gradient when `with_gradient`.
    fn evaluate(&self, coords: &[f64], with_gradient: bool) -> Result<EvaluationResult>;

    /// Returns the name of the cost function.
    fn name(&self) -> &str;
}
