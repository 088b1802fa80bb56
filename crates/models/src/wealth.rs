//! Stationary wealth under income risk.
//!
//! Households save a fixed share `s` of cash on hand at gross return `R`, so
//! wealth follows `a' = s R a + y'`. With `s R < 1` the cross-sectional
//! distribution of wealth converges to a stationary one whose moments have
//! closed forms when log income is iid normal or AR(1).

mod ar1;
mod iid;
mod simulate;
mod stats;

pub use ar1::{Ar1Income, Ar1Return};
pub use iid::IidIncome;
pub use simulate::{IncomeProcess, Simulation, SimulationConfig, simulate};
pub use stats::{gini, lognormal_moments};

use gemac_core::constraint::{OpenUnitInterval, StrictlyPositive};
use thiserror::Error;

use crate::parameter::{ParameterError, checked};

/// Statistics that cannot be computed from a sample.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WealthError {
    #[error("sample is empty")]
    EmptySample,

    #[error("sample total must be positive and finite, got {total}")]
    NonPositiveTotal { total: f64 },
}

/// Save share `s` of cash on hand at gross return `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsRule {
    s: f64,
    gross_return: f64,
}

impl Default for SavingsRule {
    fn default() -> Self {
        Self {
            s: 0.75,
            gross_return: 1.04,
        }
    }
}

impl SavingsRule {
    /// Creates a savings rule.
    ///
    /// # Errors
    ///
    /// Fails unless `0 < s < 1`, `R > 0` and `s R < 1`.
    pub fn new(s: f64, gross_return: f64) -> Result<Self, ParameterError> {
        let s = checked::<_, OpenUnitInterval>("s", s)?;
        let gross_return = checked::<_, StrictlyPositive>("R", gross_return)?;
        checked::<_, OpenUnitInterval>("s * R", s * gross_return)?;
        Ok(Self { s, gross_return })
    }

    #[must_use]
    pub fn s(&self) -> f64 {
        self.s
    }

    #[must_use]
    pub fn gross_return(&self) -> f64 {
        self.gross_return
    }

    /// Coefficient `s R` on current wealth in the law of motion.
    #[must_use]
    pub fn persistence(&self) -> f64 {
        self.s * self.gross_return
    }

    /// Next-period wealth given current wealth and next-period income.
    #[must_use]
    pub fn next_wealth(&self, wealth: f64, income: f64) -> f64 {
        self.persistence() * wealth + income
    }
}
