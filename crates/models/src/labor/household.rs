use std::convert::Infallible;

use gemac_core::{
    Model, OptimizationProblem,
    constraint::StrictlyPositive,
};
use gemac_solvers::optimization::golden_section::{self, Expansion, Status};
use thiserror::Error;
use tracing::trace;

use crate::{
    parameter::{ParameterError, checked},
    utility::{crra, labor_disutility},
};

/// Preferences over consumption and hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    gamma: f64,
    theta: f64,
    psi: f64,
}

/// Optimal hours and the consumption they finance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdChoice {
    pub h: f64,
    pub c: f64,
}

/// The hours search did not produce a usable optimum.
#[derive(Debug, Error)]
pub enum HouseholdError {
    #[error("hours search failed at wage {wage}")]
    Search {
        wage: f64,
        #[source]
        source: golden_section::Error,
    },

    #[error("hours search stopped at h = {hours} without converging ({status:?})")]
    NotConverged { hours: f64, status: Status },

    #[error("utility is not finite at the optimum h = {hours}")]
    NonFinite { hours: f64 },
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new_unchecked(2.0, 1.0, 0.5)
    }
}

impl Preferences {
    /// Creates validated preferences.
    ///
    /// - `gamma`: relative risk aversion, positive
    /// - `theta`: Frisch elasticity, positive
    /// - `psi`: weight on the disutility of work, positive
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first invalid field.
    pub fn new(gamma: f64, theta: f64, psi: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            gamma: checked::<_, StrictlyPositive>("gamma", gamma)?,
            theta: checked::<_, StrictlyPositive>("theta", theta)?,
            psi: checked::<_, StrictlyPositive>("psi", psi)?,
        })
    }

    /// Builds preferences from values known to be in range.
    pub(crate) const fn new_unchecked(gamma: f64, theta: f64, psi: f64) -> Self {
        Self { gamma, theta, psi }
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    #[must_use]
    pub fn psi(&self) -> f64 {
        self.psi
    }

    /// Period utility of consuming `c` after working `h` hours.
    #[must_use]
    pub fn utility(&self, c: f64, h: f64) -> f64 {
        crra(c, self.gamma) - labor_disutility(h, self.psi, self.theta)
    }
}

/// Maximizes utility over hours `h ≥ 0` given the budget `c = w h + income`.
///
/// The objective is strictly concave in `h`, so the search grows an upper
/// bound until utility falls and then runs golden section search on
/// `[0, upper]`. Uses the default [`Expansion`] and search settings; see
/// [`choose_hours_with`] to override them.
///
/// # Errors
///
/// Returns a [`HouseholdError`] if the search fails, stops before
/// converging, or ends at a non-finite utility.
pub fn choose_hours(
    prefs: &Preferences,
    wage: f64,
    income: f64,
) -> Result<HouseholdChoice, HouseholdError> {
    choose_hours_with(
        prefs,
        wage,
        income,
        &Expansion::default(),
        &golden_section::Config::default(),
    )
}

/// Like [`choose_hours`], with explicit bracket growth and search settings.
///
/// # Errors
///
/// See [`choose_hours`].
pub fn choose_hours_with(
    prefs: &Preferences,
    wage: f64,
    income: f64,
    expansion: &Expansion,
    config: &golden_section::Config,
) -> Result<HouseholdChoice, HouseholdError> {
    let budget = Budget { wage, income };
    let solution =
        golden_section::maximize_half_line(&budget, &Welfare(prefs), 0.0, expansion, config, ())
            .map_err(|source| HouseholdError::Search { wage, source })?;

    let hours = solution.x;
    if solution.status != Status::Converged {
        return Err(HouseholdError::NotConverged {
            hours,
            status: solution.status,
        });
    }
    if !solution.objective.is_finite() {
        return Err(HouseholdError::NonFinite { hours });
    }

    trace!(wage, income, hours, iters = solution.iters, "household hours");
    Ok(HouseholdChoice {
        h: hours,
        c: solution.snapshot.output,
    })
}

/// Consumption financed by `h` hours at a given wage and non-labor income.
struct Budget {
    wage: f64,
    income: f64,
}

impl Model for Budget {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, h: &f64) -> Result<f64, Self::Error> {
        Ok(self.wage * h + self.income)
    }
}

/// Utility of an hours-consumption pair.
struct Welfare<'a>(&'a Preferences);

impl OptimizationProblem<1> for Welfare<'_> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, h: &f64, c: &f64) -> Result<f64, Self::Error> {
        Ok(self.0.utility(*c, *h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Residual of the intratemporal condition `w u'(c) = psi h^(1/theta)`.
    fn foc_gap(prefs: &Preferences, wage: f64, choice: HouseholdChoice) -> f64 {
        wage * choice.c.powf(-prefs.gamma()) - prefs.psi() * choice.h.powf(1.0 / prefs.theta())
    }

    #[test]
    fn optimum_satisfies_first_order_condition() {
        let prefs = Preferences::default();
        let choice = choose_hours(&prefs, 0.6, 0.3).unwrap();

        assert!(foc_gap(&prefs, 0.6, choice).abs() < 1e-6);
        assert_relative_eq!(choice.c, 0.6 * choice.h + 0.3, epsilon = 1e-14);
    }

    #[test]
    fn log_utility_without_income_has_closed_form() {
        // With gamma = 1 and no income, psi h^(1+1/theta) = 1.
        let prefs = Preferences::new(1.0, 0.5, 2.0).unwrap();
        let choice = choose_hours(&prefs, 3.0, 0.0).unwrap();

        assert_relative_eq!(choice.h, 0.5_f64.powf(1.0 / 3.0), epsilon = 1e-6);
    }

    #[test]
    fn rejects_non_positive_preferences() {
        assert_eq!(Preferences::new(0.0, 1.0, 1.0).unwrap_err().field, "gamma");
        assert_eq!(Preferences::new(2.0, -1.0, 1.0).unwrap_err().field, "theta");
        assert_eq!(Preferences::new(2.0, 1.0, 0.0).unwrap_err().field, "psi");
    }

    #[test]
    fn iteration_limit_is_reported_as_not_converged() {
        let config = golden_section::Config::new(3, 0.0, 0.0).unwrap();
        let err = choose_hours_with(
            &Preferences::default(),
            0.6,
            0.3,
            &Expansion::default(),
            &config,
        )
        .unwrap_err();

        match err {
            HouseholdError::NotConverged { status, .. } => assert_eq!(status, Status::MaxIters),
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    #[test]
    fn optimum_beyond_expansion_limit_is_a_search_error() {
        // With log utility and no income, h^(1+1/theta) = 1/psi, so h = 10.
        let prefs = Preferences::new(1.0, 1.0, 0.01).unwrap();
        let expansion = Expansion::new(1.0, 1).unwrap();
        let err = choose_hours_with(
            &prefs,
            1.0,
            0.0,
            &expansion,
            &golden_section::Config::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            HouseholdError::Search {
                source: golden_section::Error::ExpansionFailed { doublings: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn unbounded_utility_is_rejected() {
        // Infinite income makes consumption, and with gamma < 1 utility, infinite.
        let prefs = Preferences::new(0.5, 1.0, 1.0).unwrap();
        let err = choose_hours(&prefs, 1.0, f64::INFINITY).unwrap_err();

        assert!(matches!(err, HouseholdError::NonFinite { .. }));
    }
}
