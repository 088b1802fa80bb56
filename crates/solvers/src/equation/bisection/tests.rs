use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error as ThisError;

use gemac_core::{EquationProblem, Model};

use super::{Action, BracketError, Config, Error, Event, Status, solve, solve_unobserved};

/// Excess demand of a toy market: `D(p) - S(p) = 4/p - p`, cleared at `p = 2`.
struct ToyMarket;

impl Model for ToyMarket {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, price: &f64) -> Result<f64, Self::Error> {
        Ok(4.0 / price - price)
    }
}

/// Residual is the model output itself.
struct Clear;

impl EquationProblem<1> for Clear {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}

#[test]
fn clears_toy_market() {
    let solution = solve_unobserved(&ToyMarket, &Clear, [0.1, 10.0], &Config::default())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-10);
    assert!(solution.residual.abs() < 1e-9);
    assert_relative_eq!(solution.snapshot.input, solution.x);
}

#[test]
fn reversed_bracket_is_accepted() {
    let solution = solve_unobserved(&ToyMarket, &Clear, [10.0, 0.1], &Config::default())
        .expect("should solve");

    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-10);
}

#[test]
fn endpoint_root_returns_immediately() {
    let solution = solve_unobserved(&ToyMarket, &Clear, [2.0, 5.0], &Config::default())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 2.0);
}

#[test]
fn no_sign_change_is_an_error_not_an_endpoint() {
    let result = solve_unobserved(&ToyMarket, &Clear, [3.0, 10.0], &Config::default());

    match result {
        Err(Error::InvalidBracket(BracketError::NoSignChange {
            left,
            right,
            left_residual,
            right_residual,
        })) => {
            assert_relative_eq!(left, 3.0);
            assert_relative_eq!(right, 10.0);
            assert!(left_residual < 0.0 && right_residual < 0.0);
        }
        other => panic!("expected NoSignChange, got {other:?}"),
    }
}

#[test]
fn invalid_bounds_are_rejected() {
    let config = Config::default();

    assert!(matches!(
        solve_unobserved(&ToyMarket, &Clear, [1.0, 1.0], &config),
        Err(Error::InvalidBracket(BracketError::ZeroWidth { .. }))
    ));
    assert!(matches!(
        solve_unobserved(&ToyMarket, &Clear, [f64::NAN, 1.0], &config),
        Err(Error::InvalidBracket(BracketError::NonFinite { .. }))
    ));
}

#[test]
fn non_finite_residual_is_an_error() {
    // 4/0 is infinite at the left endpoint.
    let result = solve_unobserved(&ToyMarket, &Clear, [0.0, 10.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
}

#[test]
fn iteration_limit_reports_max_iters() {
    let config = Config::new(3, 0.0, 0.0, 0.0).expect("valid config");

    let solution =
        solve_unobserved(&ToyMarket, &Clear, [0.1, 10.0], &config).expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
}

#[test]
fn observer_sees_every_evaluation_and_can_stop() {
    let mut endpoints = 0;
    let mut midpoints = 0;
    let observer = |event: &Event<'_, ToyMarket, Clear>| {
        match event {
            Event::Endpoint { .. } => endpoints += 1,
            Event::Midpoint { iter, .. } => {
                midpoints += 1;
                if *iter == 4 {
                    return Some(Action::StopEarly);
                }
            }
        }
        None
    };

    let solution = solve(&ToyMarket, &Clear, [0.1, 10.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 4);
    assert_eq!(endpoints, 2);
    assert_eq!(midpoints, 4);
}

#[derive(Debug, ThisError)]
#[error("price must be positive, got {0}")]
struct NonPositivePrice(f64);

/// A market whose model refuses non-positive prices.
struct StrictMarket;

impl Model for StrictMarket {
    type Input = f64;
    type Output = f64;
    type Error = NonPositivePrice;

    fn call(&self, price: &f64) -> Result<f64, Self::Error> {
        if *price <= 0.0 {
            return Err(NonPositivePrice(*price));
        }
        Ok(4.0 / price - price)
    }
}

#[test]
fn model_failure_is_reported_to_observer_then_returned() {
    let mut failures = 0;
    let observer = |event: &Event<'_, StrictMarket, Clear>| {
        if event.result().is_err() {
            failures += 1;
        }
        None
    };

    let result = solve(&StrictMarket, &Clear, [-1.0, 10.0], &Config::default(), observer);

    assert!(matches!(result, Err(Error::Model(_))));
    assert_eq!(failures, 1);
}
