//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the optimum of a unimodal function on a
//! bounded interval. It keeps two interior points placed by the golden ratio,
//! compares their objectives, and discards the part of the bracket beyond the
//! worse one. One new evaluation is needed per iteration, and the better of
//! the two interior points is always the best point seen.
//!
//! When only a lower bound is known, [`maximize_half_line`] first grows an
//! upper bound by doubling its distance from `lower` until the objective
//! stops improving, then searches the resulting bracket. For a concave
//! objective the maximum is guaranteed to lie inside it.
//!
//! # Observer Events
//!
//! Every evaluation produces one [`Event`]: [`Event::Expansion`] while an
//! upper bound is being grown, then [`Event::Interior`] for each interior
//! point. Returning [`Action::StopEarly`] ends the search with
//! [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod expand;
mod goal;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, Expansion};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use gemac_core::{Model, Observer, OptimizationProblem};

use expand::{Expanded, expand};
use goal::Goal;
use search::search;

/// Finds the minimum of the objective on `bracket`.
///
/// # Errors
///
/// Returns an error if the bracket is not finite with positive width, if an
/// objective is NaN, or if the model or problem fails.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, Goal::Minimize, &mut observer)
}

/// Finds the maximum of the objective on `bracket`.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, Goal::Maximize, &mut observer)
}

/// Finds the maximum of the objective on `[lower, ∞)`.
///
/// # Errors
///
/// Returns [`Error::ExpansionFailed`] if the objective is still improving
/// after the configured number of doublings, plus any error [`maximize`]
/// can return.
pub fn maximize_half_line<M, P, Obs>(
    model: &M,
    problem: &P,
    lower: f64,
    expansion: &Expansion,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match expand(model, problem, lower, expansion, Goal::Maximize, &mut observer)? {
        Expanded::Bracket(bracket) => {
            search(model, problem, bracket, config, Goal::Maximize, &mut observer)
        }
        Expanded::Stopped(eval) => Ok(Solution::from_eval(eval, Status::StoppedByObserver, 0)),
    }
}

/// Runs [`minimize`] without observation.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}

/// Runs [`maximize`] without observation.
///
/// # Errors
///
/// See [`maximize`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, bracket, config, ())
}
