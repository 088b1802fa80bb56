use gemac_core::{EquationProblem, Model};

use crate::equation::EvaluateResult;

/// Event emitted by the bisection solver after each evaluation.
///
/// Failed evaluations are reported too, before the solver returns the error.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Evaluation of one of the two initial endpoints.
    Endpoint {
        /// The x value that was evaluated.
        x: f64,
        /// The result of the evaluation.
        result: &'a EvaluateResult<M, P, 1>,
    },

    /// Evaluation of the midpoint of a validated bracket.
    Midpoint {
        /// Iteration counter, starting at 1.
        iter: usize,
        /// The x value that was evaluated.
        x: f64,
        /// The bracket the midpoint was taken from.
        bracket: [f64; 2],
        /// The result of the evaluation.
        result: &'a EvaluateResult<M, P, 1>,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Endpoint { x, .. } | Event::Midpoint { x, .. } => *x,
        }
    }

    /// Returns the evaluation result.
    #[must_use]
    pub fn result(&self) -> &'a EvaluateResult<M, P, 1> {
        match self {
            Event::Endpoint { result, .. } | Event::Midpoint { result, .. } => result,
        }
    }

    /// Returns the residual if the evaluation succeeded.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        self.result().as_ref().ok().map(|eval| eval.residuals[0])
    }
}
