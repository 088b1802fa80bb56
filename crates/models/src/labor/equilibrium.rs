use std::fmt;

use crate::firm::LaborDemand;

use super::{HouseholdChoice, Parameters};

/// The labor-supply economy at its market-clearing wage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium<'a> {
    pub params: &'a Parameters,
    pub c: f64,
    pub h: f64,
    pub w: f64,
    pub labor: f64,
    pub output: f64,
    pub profit: f64,
}

impl<'a> Equilibrium<'a> {
    pub(super) fn new(
        params: &'a Parameters,
        w: f64,
        firm: LaborDemand,
        household: HouseholdChoice,
    ) -> Self {
        Self {
            params,
            c: household.c,
            h: household.h,
            w,
            labor: firm.labor,
            output: firm.output,
            profit: firm.profit,
        }
    }

    /// `L - h`.
    #[must_use]
    pub fn labor_market_residual(&self) -> f64 {
        self.labor - self.h
    }

    /// `c - Y`.
    #[must_use]
    pub fn goods_market_residual(&self) -> f64 {
        self.c - self.output
    }
}

impl fmt::Display for Equilibrium<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Equilibrium:")?;
        writeln!(f, "  Households:")?;
        writeln!(f, "    c = {:.5}", self.c)?;
        writeln!(f, "    h = {:.5}", self.h)?;
        writeln!(f, "  Firms:")?;
        writeln!(f, "    Y = {:.5}", self.output)?;
        writeln!(f, "    L = {:.5}", self.labor)?;
        writeln!(f, "    Pi = {:.5}", self.profit)?;
        writeln!(f, "  Prices:")?;
        writeln!(f, "    w = {:.5}", self.w)?;
        writeln!(f, "  Market clearing:")?;
        writeln!(f, "    Labor market: {:.5e}", self.labor_market_residual())?;
        write!(f, "    Goods market: {:.5e}", self.goods_market_residual())
    }
}
