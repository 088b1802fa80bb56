//! Labor supply with a representative household and a Cobb-Douglas firm.
//!
//! The firm's capital is fixed at one, so it hires `L(w)` and earns profit
//! `Pi`, which the household owns. The household chooses hours `h` to
//! maximize `u(c) - psi h^(1+1/theta) / (1+1/theta)` subject to
//! `c = w h + Pi`. The wage clears the labor market: `L(w) - h(w) = 0`.

mod analytical;
mod equilibrium;
mod household;
mod parameters;
pub mod two_types;

pub use analytical::analytical_hours;
pub use equilibrium::Equilibrium;
pub use household::{
    HouseholdChoice, HouseholdError, Preferences, choose_hours, choose_hours_with,
};
pub use parameters::Parameters;

use gemac_solvers::equation::bisection;
use thiserror::Error;

use crate::{
    firm::{FirmError, LaborDemand},
    market::{self, EquilibriumError, MarketModel},
};

/// Failure of a partial-equilibrium solver at a candidate wage.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("firm cannot take the wage")]
    Firm(#[from] FirmError),

    #[error("household hours choice failed")]
    Household(#[from] HouseholdError),
}

/// Firm and household choices at a candidate wage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub w: f64,
    pub firm: LaborDemand,
    pub household: HouseholdChoice,
}

impl MarketModel for Parameters {
    type Allocation = Allocation;
    type Equilibrium<'a> = Equilibrium<'a>;
    type Error = AllocationError;

    const MARKET: &'static str = "labor";
    const BRACKET: [f64; 2] = [0.1, 1.0];

    fn allocate(&self, w: f64) -> Result<Allocation, AllocationError> {
        let firm = self.technology().labor_demand(w)?;
        let household = choose_hours(self.preferences(), w, firm.profit)?;
        Ok(Allocation { w, firm, household })
    }

    fn excess_demand(&self, allocation: &Allocation) -> f64 {
        allocation.firm.labor - allocation.household.h
    }

    fn equilibrium(&self, w: f64, allocation: Allocation) -> Equilibrium<'_> {
        Equilibrium::new(self, w, allocation.firm, allocation.household)
    }
}

/// Solves the labor-supply economy on its default bracket.
///
/// # Errors
///
/// Returns an [`EquilibriumError`] if the labor market cannot be cleared.
pub fn solve(params: &Parameters) -> Result<Equilibrium<'_>, EquilibriumError> {
    market::solve(params, &bisection::Config::default())
}
