//! Bisection for single-variable equations.
//!
//! # Algorithm
//!
//! Both endpoints are evaluated first. If neither is already a root, their
//! residuals must differ in sign; otherwise the solver fails with
//! [`BracketError::NoSignChange`] instead of returning an endpoint. Each
//! iteration then evaluates the midpoint and keeps the half whose endpoints
//! still straddle zero.
//!
//! The search ends when a residual is within `residual_tol`, when the bracket
//! is narrower than `x_abs_tol + x_rel_tol * |midpoint|`, or after `max_iters`
//! midpoint evaluations. The reported solution is the evaluation with the
//! smallest residual magnitude seen so far, and [`Status`] says which of the
//! three conditions ended the search. Callers that need a root must check it.
//!
//! # Observer Events
//!
//! Every evaluation, successful or not, produces one [`Event`]: two
//! [`Event::Endpoint`]s, then one [`Event::Midpoint`] per iteration.
//! Returning [`Action::StopEarly`] ends the search with
//! [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use gemac_core::{EquationProblem, Model, Observer};

use crate::equation::{EvaluateResult, Evaluation, evaluate};

use bracket::Bounds;

/// Finds a root of the equation using the bisection method.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, if a
/// residual is NaN or infinite, or if the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = Bounds::new(bracket)?;

    let mut endpoint = |x: f64| -> Result<(Evaluation<M::Input, M::Output, 1>, bool), Error> {
        let result = evaluate(model, problem, [x]);
        let action = observer.observe(&Event::Endpoint { x, result: &result });
        let eval = finite::<M, P>(result)?;
        Ok((eval, action == Some(Action::StopEarly)))
    };

    let (left, stop) = endpoint(bounds.left)?;
    let left_residual = left.residuals[0];
    if stop {
        return Ok(Solution::from_eval(left, Status::StoppedByObserver, 0));
    }
    if left_residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(left, Status::Converged, 0));
    }

    let (right, stop) = endpoint(bounds.right)?;
    let right_residual = right.residuals[0];
    let mut best = closer_to_root(left, right);
    if stop {
        return Ok(Solution::from_eval(best, Status::StoppedByObserver, 0));
    }
    if right_residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(best, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(bounds, left_residual, right_residual)?;

    for iter in 1..=config.max_iters() {
        let x = bracket.midpoint();
        let result = evaluate(model, problem, [x]);
        let action = observer.observe(&Event::Midpoint {
            iter,
            x,
            bracket: bracket.as_array(),
            result: &result,
        });
        let eval = finite::<M, P>(result)?;
        let residual = eval.residuals[0];
        best = closer_to_root(best, eval);

        if action == Some(Action::StopEarly) {
            return Ok(Solution::from_eval(best, Status::StoppedByObserver, iter));
        }
        if residual.abs() <= config.residual_tol() {
            return Ok(Solution::from_eval(best, Status::Converged, iter));
        }

        bracket.shrink(x, Sign::of(residual));
        if bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol()) {
            return Ok(Solution::from_eval(best, Status::Converged, iter));
        }
    }

    Ok(Solution::from_eval(best, Status::MaxIters, config.max_iters()))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Unwraps an evaluation and rejects NaN or infinite residuals.
fn finite<M, P>(
    result: EvaluateResult<M, P, 1>,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = result?;
    let residual = eval.residuals[0];
    if residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x[0],
            residual,
        })
    }
}

/// Keeps whichever evaluation has the smaller residual magnitude.
///
/// Ties go to `current` so earlier evaluations are preferred.
fn closer_to_root<I, O>(
    current: Evaluation<I, O, 1>,
    candidate: Evaluation<I, O, 1>,
) -> Evaluation<I, O, 1> {
    if candidate.residuals[0].abs() < current.residuals[0].abs() {
        candidate
    } else {
        current
    }
}
