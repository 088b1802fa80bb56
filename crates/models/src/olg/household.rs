use crate::firm::FactorPrices;

use super::Parameters;

/// Life-cycle choices of one household born at wage `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdChoice {
    /// Consumption when young.
    pub c_y: f64,
    /// Consumption when old.
    pub c_o: f64,
    /// Savings.
    pub a: f64,
}

/// Share of the wage saved at interest rate `r`.
///
/// From the Euler equation `c_y^(-gamma) = beta (1+r) c_o^(-gamma)`:
/// `s = 1 / (1 + beta^(-1/gamma) (1+r)^(1-1/gamma))`. With `gamma = 1` this
/// is `beta / (1 + beta)` for every `r`.
#[must_use]
pub fn savings_rate(params: &Parameters, r: f64) -> f64 {
    let inv_gamma = 1.0 / params.gamma();
    1.0 / (1.0 + params.beta().powf(-inv_gamma) * (1.0 + r).powf(1.0 - inv_gamma))
}

pub(super) fn choose(params: &Parameters, prices: FactorPrices) -> HouseholdChoice {
    let a = savings_rate(params, prices.r) * prices.w;
    HouseholdChoice {
        c_y: prices.w - a,
        c_o: (1.0 + prices.r) * a,
        a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn choices_satisfy_the_euler_equation() {
        let params = Parameters::default();
        let prices = FactorPrices { r: 0.05, w: 0.6 };
        let choice = choose(&params, prices);

        let lhs = choice.c_y.powf(-params.gamma());
        let rhs = params.beta() * (1.0 + prices.r) * choice.c_o.powf(-params.gamma());
        assert_relative_eq!(lhs, rhs, max_relative = 1e-12);
    }

    #[test]
    fn log_utility_saves_a_constant_share() {
        let params = Parameters::new(0.36, 1.0, 0.96, 1.0, 1).unwrap();

        for r in [-0.5, 0.0, 0.3, 2.0] {
            assert_relative_eq!(savings_rate(&params, r), 0.96 / 1.96, epsilon = 1e-14);
        }
    }
}
