use gemac_core::{Model, Observer, OptimizationProblem};

use super::{
    Action, Config, Error, Event, Solution,
    bracket::GoldenBracket,
    event::{Site, observed},
    goal::Goal,
    solution::Status,
    state::State,
};

/// Golden section search on a finite bracket.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    goal: Goal,
    observer: &mut Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bracket = GoldenBracket::new(bounds)?;
    let initial = Site::Interior {
        iter: 0,
        bracket: bracket.outer(),
    };

    let (left, stop) = observed(model, problem, bracket.inner_left, initial, observer)?;
    if stop {
        return Ok(Solution::from_eval(left, Status::StoppedByObserver, 0));
    }

    let (right, stop) = observed(model, problem, bracket.inner_right, initial, observer)?;
    let mut state = State::new(bracket, left, right, goal);
    if stop {
        return Ok(state.into_solution(Status::StoppedByObserver, 0));
    }

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let site = Site::Interior {
            iter,
            bracket: state.bracket(),
        };
        let (eval, stop) = observed(model, problem, state.next_x(), site, observer)?;
        state.accept(eval);

        if stop {
            return Ok(state.into_solution(Status::StoppedByObserver, iter));
        }
    }

    Ok(state.into_solution(Status::MaxIters, config.max_iters()))
}
