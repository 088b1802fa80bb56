use std::fmt;

use crate::firm::FactorPrices;

use super::{HouseholdChoice, Parameters};

/// The OLG economy at its market-clearing capital-labor ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium<'a> {
    pub params: &'a Parameters,
    pub c_y: f64,
    pub c_o: f64,
    pub a: f64,
    pub r: f64,
    pub w: f64,
    pub capital: f64,
    pub labor: f64,
    pub output: f64,
}

impl<'a> Equilibrium<'a> {
    pub(super) fn new(
        params: &'a Parameters,
        household: HouseholdChoice,
        prices: FactorPrices,
        capital: f64,
        labor: f64,
        output: f64,
    ) -> Self {
        Self {
            params,
            c_y: household.c_y,
            c_o: household.c_o,
            a: household.a,
            r: prices.r,
            w: prices.w,
            capital,
            labor,
            output,
        }
    }

    /// Capital-labor ratio `K / L`.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.capital / self.labor
    }

    /// Capital demanded minus savings supplied: `K - a N`.
    #[must_use]
    pub fn capital_market_residual(&self) -> f64 {
        self.capital - self.a * f64::from(self.params.households())
    }

    /// Consumption of both cohorts minus output: `(c_y + c_o) N - Y`.
    #[must_use]
    pub fn goods_market_residual(&self) -> f64 {
        (self.c_y + self.c_o) * f64::from(self.params.households()) - self.output
    }
}

impl fmt::Display for Equilibrium<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Equilibrium:")?;
        writeln!(f, "  Households:")?;
        writeln!(f, "    c_y = {:.5}", self.c_y)?;
        writeln!(f, "    c_o = {:.5}", self.c_o)?;
        writeln!(f, "    a = {:.5}", self.a)?;
        writeln!(f, "  Firms:")?;
        writeln!(f, "    K = {:.5}", self.capital)?;
        writeln!(f, "    L = {:.5}", self.labor)?;
        writeln!(f, "    Y = {:.5}", self.output)?;
        writeln!(f, "  Prices:")?;
        writeln!(f, "    r = {:.5}", self.r)?;
        writeln!(f, "    w = {:.5}", self.w)?;
        writeln!(f, "  Market clearing:")?;
        writeln!(f, "    Capital market: {:.5e}", self.capital_market_residual())?;
        write!(f, "    Goods market: {:.5e}", self.goods_market_residual())
    }
}
