use gemac_core::constraint::StrictlyPositive;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use crate::parameter::{ParameterError, checked};

use super::{Ar1Income, IidIncome, SavingsRule};

/// An income process with its savings rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IncomeProcess {
    Iid(IidIncome),
    Ar1(Ar1Income),
}

impl IncomeProcess {
    #[must_use]
    pub fn savings(&self) -> &SavingsRule {
        match self {
            IncomeProcess::Iid(income) => income.savings(),
            IncomeProcess::Ar1(income) => income.savings(),
        }
    }

    /// Closed-form mean of stationary wealth.
    #[must_use]
    pub fn wealth_mean(&self) -> f64 {
        match self {
            IncomeProcess::Iid(income) => income.wealth_mean(),
            IncomeProcess::Ar1(income) => income.wealth_mean(),
        }
    }

    /// Draws log income from the stationary distribution.
    fn initial_log_income<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let eps: f64 = StandardNormal.sample(rng);
        match self {
            IncomeProcess::Iid(income) => income.mu_y() + income.sigma_y() * eps,
            IncomeProcess::Ar1(income) => {
                income.log_income_mean() + income.log_income_var().sqrt() * eps
            }
        }
    }

    /// Draws next period's log income given this period's.
    fn next_log_income<R: Rng + ?Sized>(&self, log_income: f64, rng: &mut R) -> f64 {
        let eps: f64 = StandardNormal.sample(rng);
        match self {
            IncomeProcess::Iid(income) => income.mu_y() + income.sigma_y() * eps,
            IncomeProcess::Ar1(income) => {
                income.mu_y() + income.rho() * log_income + income.sigma_eps() * eps
            }
        }
    }
}

/// Size of a simulated cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    households: usize,
    periods: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            households: 10_000,
            periods: 200,
        }
    }
}

impl SimulationConfig {
    /// # Errors
    ///
    /// Fails if either count is zero.
    pub fn new(households: usize, periods: usize) -> Result<Self, ParameterError> {
        Ok(Self {
            households: checked::<_, StrictlyPositive>("households", households)?,
            periods: checked::<_, StrictlyPositive>("periods", periods)?,
        })
    }

    #[must_use]
    pub fn households(&self) -> usize {
        self.households
    }

    #[must_use]
    pub fn periods(&self) -> usize {
        self.periods
    }
}

/// Wealth and income of every household in the final period.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub wealth: Vec<f64>,
    pub income: Vec<f64>,
}

impl Simulation {
    #[must_use]
    pub fn mean_wealth(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = self.wealth.len() as f64;
        self.wealth.iter().sum::<f64>() / n
    }
}

/// Simulates a cross-section of households from zero wealth.
///
/// Log income starts in its stationary distribution; after enough periods
/// the wealth distribution is approximately stationary too.
pub fn simulate<R: Rng + ?Sized>(
    process: &IncomeProcess,
    config: &SimulationConfig,
    rng: &mut R,
) -> Simulation {
    let savings = process.savings();
    let mut wealth = Vec::with_capacity(config.households);
    let mut income = Vec::with_capacity(config.households);

    for _ in 0..config.households {
        let mut log_y = process.initial_log_income(rng);
        let mut a = 0.0;
        for _ in 0..config.periods {
            log_y = process.next_log_income(log_y, rng);
            a = savings.next_wealth(a, log_y.exp());
        }
        wealth.push(a);
        income.push(log_y.exp());
    }

    let simulation = Simulation { wealth, income };
    debug!(
        households = config.households,
        periods = config.periods,
        mean_wealth = simulation.mean_wealth(),
        "simulated wealth distribution"
    );
    simulation
}
