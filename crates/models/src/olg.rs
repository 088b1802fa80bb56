//! Two-period overlapping generations with CRRA utility.
//!
//! Each period a cohort of `N` young households works for wage `w`, saves
//! `a = s(r) w`, and consumes the rest; when old it consumes `(1+r) a`.
//! Firms rent the savings of the old as capital. The capital-labor ratio `k`
//! clears the capital market: `K - A = k N - s(r) w N = 0`.

mod equilibrium;
mod household;
mod parameters;

pub use equilibrium::Equilibrium;
pub use household::{HouseholdChoice, savings_rate};
pub use parameters::Parameters;

use gemac_solvers::equation::bisection;

use crate::{
    firm::{FactorPrices, FirmError},
    market::{self, EquilibriumError, MarketModel},
};

/// Prices and household choices at a candidate capital-labor ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    /// Capital-labor ratio.
    pub k: f64,
    pub prices: FactorPrices,
    pub household: HouseholdChoice,
}

impl MarketModel for Parameters {
    type Allocation = Allocation;
    type Equilibrium<'a> = Equilibrium<'a>;
    type Error = FirmError;

    const MARKET: &'static str = "capital";
    const BRACKET: [f64; 2] = [1e-3, 10.0];

    fn allocate(&self, k: f64) -> Result<Allocation, FirmError> {
        let prices = self.technology().factor_prices(k)?;
        let household = household::choose(self, prices);
        Ok(Allocation {
            k,
            prices,
            household,
        })
    }

    fn excess_demand(&self, allocation: &Allocation) -> f64 {
        let n = f64::from(self.households());
        allocation.k * n - allocation.household.a * n
    }

    fn equilibrium(&self, k: f64, allocation: Allocation) -> Equilibrium<'_> {
        let labor = f64::from(self.households());
        let capital = k * labor;
        Equilibrium::new(
            self,
            allocation.household,
            allocation.prices,
            capital,
            labor,
            self.technology().output(capital, labor),
        )
    }
}

/// Solves the OLG economy on its default bracket.
///
/// # Errors
///
/// Returns an [`EquilibriumError`] if the capital market cannot be cleared.
pub fn solve(params: &Parameters) -> Result<Equilibrium<'_>, EquilibriumError> {
    market::solve(params, &bisection::Config::default())
}
