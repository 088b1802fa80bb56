use gemac_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Evaluation, EvaluateResult, evaluate};

use super::{Action, Error};

/// Event emitted by the golden section solver after each evaluation.
pub enum Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Evaluation of a trial upper bound during half-line expansion.
    Expansion {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },

    /// Evaluation of an interior point.
    ///
    /// The two initial interior points are reported with `iter == 0`.
    Interior {
        iter: usize,
        x: f64,
        /// Outer bracket the point was placed in.
        bracket: [f64; 2],
        result: &'a EvaluateResult<M, P, 1>,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Expansion { x, .. } | Event::Interior { x, .. } => *x,
        }
    }

    #[must_use]
    pub fn result(&self) -> &'a EvaluateResult<M, P, 1> {
        match self {
            Event::Expansion { result, .. } | Event::Interior { result, .. } => result,
        }
    }

    /// Returns the objective if the evaluation succeeded.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        self.result().as_ref().ok().map(|eval| eval.objective)
    }
}

/// Where an evaluation happens, used to build its [`Event`].
#[derive(Debug, Clone, Copy)]
pub(super) enum Site {
    Expansion,
    Interior { iter: usize, bracket: [f64; 2] },
}

/// Evaluates at `x`, reports the event, and rejects NaN objectives.
///
/// The returned flag is true if the observer asked to stop.
pub(super) fn observed<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    site: Site,
    observer: &mut Obs,
) -> Result<(Evaluation<M::Input, M::Output, 1>, bool), Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let result = evaluate(model, problem, [x]);
    let action = match site {
        Site::Expansion => observer.observe(&Event::Expansion { x, result: &result }),
        Site::Interior { iter, bracket } => observer.observe(&Event::Interior {
            iter,
            x,
            bracket,
            result: &result,
        }),
    };

    let eval = result?;
    if eval.objective.is_nan() {
        return Err(Error::NanObjective { x });
    }
    Ok((eval, action == Some(Action::StopEarly)))
}
