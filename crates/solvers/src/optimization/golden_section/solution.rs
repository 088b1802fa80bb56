use gemac_core::Snapshot;

use crate::optimization::Evaluation;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interior points are within the configured tolerances.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,
    /// Best x evaluated.
    pub x: f64,
    /// Objective value at `x`.
    pub objective: f64,
    pub snapshot: Snapshot<I, O>,
    /// Shrink iterations performed.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    pub(super) fn from_eval(eval: Evaluation<I, O, 1>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x[0],
            objective: eval.objective,
            snapshot: eval.snapshot,
            iters,
        }
    }
}
