use gemac_core::constraint::NonNegative;

use crate::parameter::{ParameterError, checked, finite};

use super::{SavingsRule, lognormal_moments};

/// Log income drawn iid from `N(mu_y, sigma_y^2)` each period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IidIncome {
    mu_y: f64,
    sigma_y: f64,
    savings: SavingsRule,
}

impl Default for IidIncome {
    fn default() -> Self {
        Self {
            mu_y: 0.0,
            sigma_y: 0.5,
            savings: SavingsRule::default(),
        }
    }
}

impl IidIncome {
    /// # Errors
    ///
    /// Fails if `mu_y` is not finite or `sigma_y` is negative.
    pub fn new(mu_y: f64, sigma_y: f64, savings: SavingsRule) -> Result<Self, ParameterError> {
        Ok(Self {
            mu_y: finite("mu_y", mu_y)?,
            sigma_y: checked::<_, NonNegative>("sigma_y", sigma_y)?,
            savings,
        })
    }

    #[must_use]
    pub fn mu_y(&self) -> f64 {
        self.mu_y
    }

    #[must_use]
    pub fn sigma_y(&self) -> f64 {
        self.sigma_y
    }

    #[must_use]
    pub fn savings(&self) -> &SavingsRule {
        &self.savings
    }

    /// Mean of stationary wealth, `E[y] / (1 - s R)`.
    #[must_use]
    pub fn wealth_mean(&self) -> f64 {
        let (y_mean, _) = lognormal_moments(self.mu_y, self.sigma_y);
        y_mean / (1.0 - self.savings.persistence())
    }

    /// Variance of stationary wealth, `Var[y] / (1 - (s R)^2)`.
    #[must_use]
    pub fn wealth_var(&self) -> f64 {
        let (_, y_var) = lognormal_moments(self.mu_y, self.sigma_y);
        y_var / (1.0 - self.savings.persistence().powi(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_values() {
        let income = IidIncome::default();

        assert_relative_eq!(income.wealth_mean(), 0.125_f64.exp() / 0.22, epsilon = 1e-12);
        let y_var = 0.25_f64.exp() * (0.25_f64.exp() - 1.0);
        assert_relative_eq!(income.wealth_var(), y_var / (1.0 - 0.78 * 0.78), epsilon = 1e-12);
    }

    #[test]
    fn deterministic_income_has_no_wealth_variance() {
        let income = IidIncome::new(0.3, 0.0, SavingsRule::default()).unwrap();

        assert_relative_eq!(income.wealth_var(), 0.0);
        assert_relative_eq!(income.wealth_mean(), 0.3_f64.exp() / 0.22, epsilon = 1e-12);
    }

    #[test]
    fn rejects_negative_volatility() {
        let err = IidIncome::new(0.0, -0.1, SavingsRule::default()).unwrap_err();
        assert_eq!(err.field, "sigma_y");
    }
}
