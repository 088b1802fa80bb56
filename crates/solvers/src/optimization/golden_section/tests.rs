use std::convert::Infallible;

use approx::assert_relative_eq;

use gemac_core::{Model, OptimizationProblem};

use super::*;

/// Concave quadratic `-(x - peak)^2`.
struct Hill {
    peak: f64,
}

impl Model for Hill {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(-(x - self.peak).powi(2))
    }
}

/// `ln(x) - x / 5`, maximized at `x = 5`.
struct LogLinear;

impl Model for LogLinear {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.ln() - x / 5.0)
    }
}

/// Strictly increasing, so no finite maximum exists.
struct Ramp;

impl Model for Ramp {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(*x)
    }
}

struct ObjectiveIsOutput;

impl OptimizationProblem<1> for ObjectiveIsOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

/// Objective is the negated output, turning a hill into a valley.
struct NegatedOutput;

impl OptimizationProblem<1> for NegatedOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(-output)
    }
}

#[test]
fn maximizes_on_bracket() {
    let solution = maximize_unobserved(
        &Hill { peak: 3.0 },
        &ObjectiveIsOutput,
        [0.0, 10.0],
        &Config::default(),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);
    assert_relative_eq!(solution.snapshot.input, solution.x);
}

#[test]
fn minimizes_on_bracket() {
    let solution = minimize_unobserved(
        &Hill { peak: -1.5 },
        &NegatedOutput,
        [2.0, -4.0],
        &Config::default(),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -1.5, epsilon = 1e-6);
}

#[test]
fn optimum_at_bracket_edge_is_approached() {
    let solution = maximize_unobserved(&Ramp, &ObjectiveIsOutput, [0.0, 1.0], &Config::default())
        .expect("should solve");

    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-9);
}

#[test]
fn half_line_expands_past_initial_width() {
    let solution = maximize_half_line(
        &Hill { peak: 7.3 },
        &ObjectiveIsOutput,
        0.0,
        &Expansion::default(),
        &Config::default(),
        (),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 7.3, epsilon = 1e-6);
}

#[test]
fn half_line_handles_optimum_below_initial_width() {
    let solution = maximize_half_line(
        &LogLinear,
        &ObjectiveIsOutput,
        0.0,
        &Expansion::new(20.0, 10).expect("valid expansion"),
        &Config::default(),
        (),
    )
    .expect("should solve");

    assert_relative_eq!(solution.x, 5.0, epsilon = 1e-5);
}

#[test]
fn half_line_reports_expansion_probes() {
    let mut probes = Vec::new();
    let observer = |event: &Event<'_, Hill, ObjectiveIsOutput>| {
        if let Event::Expansion { x, .. } = event {
            probes.push(*x);
        }
        None
    };

    maximize_half_line(
        &Hill { peak: 7.3 },
        &ObjectiveIsOutput,
        0.0,
        &Expansion::default(),
        &Config::default(),
        observer,
    )
    .expect("should solve");

    assert_eq!(probes, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
}

#[test]
fn unbounded_objective_fails_expansion() {
    let result = maximize_half_line(
        &Ramp,
        &ObjectiveIsOutput,
        0.0,
        &Expansion::new(1.0, 5).expect("valid expansion"),
        &Config::default(),
        (),
    );

    match result {
        Err(Error::ExpansionFailed {
            lower,
            upper,
            doublings,
        }) => {
            assert_relative_eq!(lower, 0.0);
            assert_relative_eq!(upper, 32.0);
            assert_eq!(doublings, 5);
        }
        other => panic!("expected ExpansionFailed, got {other:?}"),
    }
}

#[test]
fn nan_objective_is_an_error() {
    // ln of a negative number is NaN.
    let result = maximize_unobserved(&LogLinear, &ObjectiveIsOutput, [-2.0, -1.0], &Config::default());

    assert!(matches!(result, Err(Error::NanObjective { .. })));
}

#[test]
fn invalid_bracket_is_an_error() {
    let result = maximize_unobserved(&Ramp, &ObjectiveIsOutput, [1.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::InvalidBracket { .. })));
}

#[test]
fn iteration_limit_reports_max_iters() {
    let config = Config::new(5, 0.0, 0.0).expect("valid config");

    let solution = maximize_unobserved(&Hill { peak: 3.0 }, &ObjectiveIsOutput, [0.0, 10.0], &config)
        .expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
}

#[test]
fn observer_can_stop_early() {
    let mut seen = 0;
    let observer = |event: &Event<'_, Hill, ObjectiveIsOutput>| {
        seen += 1;
        match event {
            Event::Interior { iter: 3, .. } => Some(Action::StopEarly),
            _ => None,
        }
    };

    let solution = maximize(
        &Hill { peak: 3.0 },
        &ObjectiveIsOutput,
        [0.0, 10.0],
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    // Two initial interior points plus three iterations.
    assert_eq!(seen, 5);
}
