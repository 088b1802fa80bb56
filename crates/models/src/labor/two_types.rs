//! The labor-supply economy with two household types.
//!
//! There are `N1` households of type 1 and `N2` of type 2, with their own
//! preferences. Only type 2 owns the firm, so each type-2 household receives
//! `pi2 = Pi / N2` and type 1 lives on wage income alone. The wage clears the
//! labor market: `L(w) - N1 h1(w) - N2 h2(w) = 0`.

use std::fmt;

use gemac_core::constraint::StrictlyPositive;
use gemac_solvers::equation::bisection;

use crate::{
    firm::{CobbDouglas, LaborDemand},
    market::{self, EquilibriumError, MarketModel},
    parameter::{ParameterError, checked},
};

use super::{AllocationError, HouseholdChoice, Preferences, choose_hours};

/// Parameters of the two-type economy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    technology: CobbDouglas,
    type1: Preferences,
    type2: Preferences,
    n1: u32,
    n2: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            technology: CobbDouglas::default(),
            type1: Preferences::default(),
            type2: Preferences::new_unchecked(1.0, 0.5, 1.0),
            n1: 1,
            n2: 1,
        }
    }
}

impl Parameters {
    /// Creates validated parameters from already validated parts.
    ///
    /// # Errors
    ///
    /// Fails if either household count is zero.
    pub fn new(
        technology: CobbDouglas,
        type1: Preferences,
        type2: Preferences,
        n1: u32,
        n2: u32,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            technology,
            type1,
            type2,
            n1: checked::<_, StrictlyPositive>("n1", n1)?,
            n2: checked::<_, StrictlyPositive>("n2", n2)?,
        })
    }

    #[must_use]
    pub fn technology(&self) -> &CobbDouglas {
        &self.technology
    }

    #[must_use]
    pub fn type1(&self) -> &Preferences {
        &self.type1
    }

    #[must_use]
    pub fn type2(&self) -> &Preferences {
        &self.type2
    }

    #[must_use]
    pub fn n1(&self) -> u32 {
        self.n1
    }

    #[must_use]
    pub fn n2(&self) -> u32 {
        self.n2
    }
}

/// Choices of the firm and both household types at a candidate wage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub w: f64,
    pub firm: LaborDemand,
    pub type1: HouseholdChoice,
    pub type2: HouseholdChoice,
    /// Profit paid to each type-2 household.
    pub pi2: f64,
}

impl MarketModel for Parameters {
    type Allocation = Allocation;
    type Equilibrium<'a> = Equilibrium<'a>;
    type Error = AllocationError;

    const MARKET: &'static str = "labor (two types)";
    const BRACKET: [f64; 2] = [0.05, 5.0];

    fn allocate(&self, w: f64) -> Result<Allocation, AllocationError> {
        let firm = self.technology.labor_demand(w)?;
        let pi2 = firm.profit / f64::from(self.n2);
        Ok(Allocation {
            w,
            firm,
            type1: choose_hours(&self.type1, w, 0.0)?,
            type2: choose_hours(&self.type2, w, pi2)?,
            pi2,
        })
    }

    fn excess_demand(&self, allocation: &Allocation) -> f64 {
        allocation.firm.labor
            - f64::from(self.n1) * allocation.type1.h
            - f64::from(self.n2) * allocation.type2.h
    }

    fn equilibrium(&self, w: f64, allocation: Allocation) -> Equilibrium<'_> {
        Equilibrium {
            params: self,
            c1: allocation.type1.c,
            h1: allocation.type1.h,
            c2: allocation.type2.c,
            h2: allocation.type2.h,
            pi2: allocation.pi2,
            w,
            labor: allocation.firm.labor,
            output: allocation.firm.output,
            profit: allocation.firm.profit,
        }
    }
}

/// The two-type economy at its market-clearing wage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium<'a> {
    pub params: &'a Parameters,
    pub c1: f64,
    pub h1: f64,
    pub c2: f64,
    pub h2: f64,
    pub pi2: f64,
    pub w: f64,
    pub labor: f64,
    pub output: f64,
    pub profit: f64,
}

impl Equilibrium<'_> {
    fn counts(&self) -> (f64, f64) {
        (f64::from(self.params.n1), f64::from(self.params.n2))
    }

    /// `L - N1 h1 - N2 h2`.
    #[must_use]
    pub fn labor_market_residual(&self) -> f64 {
        let (n1, n2) = self.counts();
        self.labor - n1 * self.h1 - n2 * self.h2
    }

    /// `N1 c1 + N2 c2 - Y`.
    #[must_use]
    pub fn goods_market_residual(&self) -> f64 {
        let (n1, n2) = self.counts();
        n1 * self.c1 + n2 * self.c2 - self.output
    }

    /// `N2 pi2 - Pi`.
    #[must_use]
    pub fn profit_residual(&self) -> f64 {
        let (_, n2) = self.counts();
        n2 * self.pi2 - self.profit
    }
}

impl fmt::Display for Equilibrium<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Equilibrium:")?;
        writeln!(f, "  Households:")?;
        writeln!(f, "    Type 1 (N = {}):", self.params.n1)?;
        writeln!(f, "      c1 = {:.5}", self.c1)?;
        writeln!(f, "      h1 = {:.5}", self.h1)?;
        writeln!(f, "    Type 2 (N = {}):", self.params.n2)?;
        writeln!(f, "      c2 = {:.5}", self.c2)?;
        writeln!(f, "      h2 = {:.5}", self.h2)?;
        writeln!(f, "      pi2 = {:.5}", self.pi2)?;
        writeln!(f, "  Firms:")?;
        writeln!(f, "    Y = {:.5}", self.output)?;
        writeln!(f, "    L = {:.5}", self.labor)?;
        writeln!(f, "    Pi = {:.5}", self.profit)?;
        writeln!(f, "  Prices:")?;
        writeln!(f, "    w = {:.5}", self.w)?;
        writeln!(f, "  Market clearing:")?;
        writeln!(f, "    Labor market: {:.5e}", self.labor_market_residual())?;
        writeln!(f, "    Goods market: {:.5e}", self.goods_market_residual())?;
        write!(f, "    Profits: {:.5e}", self.profit_residual())
    }
}

/// Solves the two-type economy on its default bracket.
///
/// # Errors
///
/// Returns an [`EquilibriumError`] if the labor market cannot be cleared.
pub fn solve(params: &Parameters) -> Result<Equilibrium<'_>, EquilibriumError> {
    market::solve(params, &bisection::Config::default())
}
