use gemac_core::{Model, Observer, OptimizationProblem};

use crate::optimization::Evaluation;

use super::{
    Action, Error, Event, Expansion,
    event::{Site, observed},
    goal::Goal,
};

pub(super) enum Expanded<I, O> {
    /// A bracket known to contain the optimum of a unimodal objective.
    Bracket([f64; 2]),
    /// The observer stopped expansion; carries the best evaluation so far.
    Stopped(Evaluation<I, O, 1>),
}

/// Grows `upper` away from `lower` until the objective stops improving.
///
/// Once `f(upper_next)` is no better than `f(upper)`, a unimodal objective
/// has its optimum in `[lower, upper_next]`.
pub(super) fn expand<M, P, Obs>(
    model: &M,
    problem: &P,
    lower: f64,
    expansion: &Expansion,
    goal: Goal,
    observer: &mut Obs,
) -> Result<Expanded<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let mut upper = lower + expansion.initial_width();
    if !upper.is_finite() {
        return Err(Error::InvalidBracket {
            left: lower,
            right: upper,
        });
    }

    let (mut current, stop) = observed(model, problem, upper, Site::Expansion, observer)?;
    if stop {
        return Ok(Expanded::Stopped(current));
    }

    for _ in 0..expansion.max_doublings() {
        let next = lower + 2.0 * (upper - lower);
        let (eval, stop) = observed(model, problem, next, Site::Expansion, observer)?;
        let improved = goal.improves(eval.objective, current.objective);

        if stop {
            return Ok(Expanded::Stopped(if improved { eval } else { current }));
        }
        if !improved {
            return Ok(Expanded::Bracket([lower, next]));
        }

        upper = next;
        current = eval;
    }

    Err(Error::ExpansionFailed {
        lower,
        upper,
        doublings: expansion.max_doublings(),
    })
}
