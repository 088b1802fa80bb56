use gemac_core::constraint::{AbsBelowOne, NonNegative};

use crate::parameter::{ParameterError, checked, finite};

use super::{SavingsRule, lognormal_moments};

/// Log income following `ln y' = mu_y + rho ln y + sigma_eps eps'`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ar1Income {
    mu_y: f64,
    rho: f64,
    sigma_eps: f64,
    savings: SavingsRule,
}

/// Log gross returns following `ln R' = mu_r + rho_r ln R + sigma_r eps'`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ar1Return {
    mu_r: f64,
    rho_r: f64,
    sigma_r: f64,
}

impl Default for Ar1Income {
    fn default() -> Self {
        Self {
            mu_y: 0.0,
            rho: 0.9,
            sigma_eps: 0.2,
            savings: SavingsRule::default(),
        }
    }
}

impl Ar1Income {
    /// # Errors
    ///
    /// Fails if `mu_y` is not finite, `|rho| ≥ 1`, or `sigma_eps < 0`.
    pub fn new(
        mu_y: f64,
        rho: f64,
        sigma_eps: f64,
        savings: SavingsRule,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            mu_y: finite("mu_y", mu_y)?,
            rho: checked::<_, AbsBelowOne>("rho", rho)?,
            sigma_eps: checked::<_, NonNegative>("sigma_eps", sigma_eps)?,
            savings,
        })
    }

    #[must_use]
    pub fn mu_y(&self) -> f64 {
        self.mu_y
    }

    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    #[must_use]
    pub fn sigma_eps(&self) -> f64 {
        self.sigma_eps
    }

    #[must_use]
    pub fn savings(&self) -> &SavingsRule {
        &self.savings
    }

    /// Unconditional mean of log income, `mu_y / (1 - rho)`.
    #[must_use]
    pub fn log_income_mean(&self) -> f64 {
        self.mu_y / (1.0 - self.rho)
    }

    /// Unconditional variance of log income, `sigma_eps^2 / (1 - rho^2)`.
    #[must_use]
    pub fn log_income_var(&self) -> f64 {
        self.sigma_eps.powi(2) / (1.0 - self.rho.powi(2))
    }

    /// Mean of stationary wealth, `E[y] / (1 - s R)`.
    #[must_use]
    pub fn wealth_mean(&self) -> f64 {
        let (y_mean, _) = lognormal_moments(self.log_income_mean(), self.log_income_var().sqrt());
        y_mean / (1.0 - self.savings.persistence())
    }
}

impl Default for Ar1Return {
    fn default() -> Self {
        Self {
            mu_r: 0.01,
            rho_r: 0.5,
            sigma_r: 0.1,
        }
    }
}

impl Ar1Return {
    /// # Errors
    ///
    /// Fails if `mu_r` is not finite, `|rho_r| ≥ 1`, or `sigma_r < 0`.
    pub fn new(mu_r: f64, rho_r: f64, sigma_r: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            mu_r: finite("mu_r", mu_r)?,
            rho_r: checked::<_, AbsBelowOne>("rho_r", rho_r)?,
            sigma_r: checked::<_, NonNegative>("sigma_r", sigma_r)?,
        })
    }

    /// Unconditional mean of the gross return,
    /// `exp(mu_r / (1 - rho_r) + sigma_r^2 / (2 (1 - rho_r^2)))`.
    #[must_use]
    pub fn mean_gross_return(&self) -> f64 {
        let log_mean = self.mu_r / (1.0 - self.rho_r);
        let log_var = self.sigma_r.powi(2) / (1.0 - self.rho_r.powi(2));
        (log_mean + log_var / 2.0).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn no_persistence_matches_iid() {
        let ar1 = Ar1Income::new(0.1, 0.0, 0.5, SavingsRule::default()).unwrap();
        let iid = super::super::IidIncome::new(0.1, 0.5, SavingsRule::default()).unwrap();

        assert_relative_eq!(ar1.wealth_mean(), iid.wealth_mean(), epsilon = 1e-12);
    }

    #[test]
    fn default_values() {
        let income = Ar1Income::default();
        let log_var = 0.04 / 0.19;

        assert_relative_eq!(income.log_income_var(), log_var, epsilon = 1e-14);
        assert_relative_eq!(income.wealth_mean(), (log_var / 2.0).exp() / 0.22, epsilon = 1e-12);
    }

    #[test]
    fn mean_gross_return() {
        let expected = (0.02 + 0.01 / 2.0 / 0.75_f64).exp();
        assert_relative_eq!(Ar1Return::default().mean_gross_return(), expected, epsilon = 1e-14);
    }

    #[test]
    fn rejects_unit_root() {
        assert_eq!(
            Ar1Income::new(0.0, 1.0, 0.2, SavingsRule::default()).unwrap_err().field,
            "rho"
        );
        assert_eq!(Ar1Return::new(0.0, -1.0, 0.1).unwrap_err().field, "rho_r");
    }
}
