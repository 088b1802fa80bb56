//! Period utility functions.

/// CRRA utility of consumption with relative risk aversion `gamma`.
///
/// Uses `ln c` when `gamma` is exactly one, where the power form is
/// singular; elsewhere `(c^(1-gamma) - 1) / (1-gamma)`, which tends to
/// `ln c` as `gamma → 1`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn crra(c: f64, gamma: f64) -> f64 {
    if gamma == 1.0 {
        c.ln()
    } else {
        (c.powf(1.0 - gamma) - 1.0) / (1.0 - gamma)
    }
}

/// Disutility of working `h` hours: `psi h^(1+1/theta) / (1+1/theta)`.
///
/// `theta` is the Frisch elasticity of labor supply.
#[must_use]
pub fn labor_disutility(h: f64, psi: f64, theta: f64) -> f64 {
    let exponent = 1.0 + 1.0 / theta;
    psi * h.powf(exponent) / exponent
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn log_branch_is_the_crra_limit() {
        for c in [0.3, 1.0, 2.5] {
            assert_relative_eq!(crra(c, 1.0 + 1e-7), crra(c, 1.0), epsilon = 1e-6);
            assert_relative_eq!(crra(c, 1.0 - 1e-7), crra(c, 1.0), epsilon = 1e-6);
        }
    }

    #[test]
    fn crra_is_normalized_at_one() {
        assert_relative_eq!(crra(1.0, 2.0), 0.0);
        assert_relative_eq!(crra(1.0, 1.0), 0.0);
        assert_relative_eq!(crra(2.0, 2.0), 0.5);
    }

    #[test]
    fn disutility_marginal_is_psi_h_to_inverse_frisch() {
        let (h, psi, theta) = (0.7, 0.5, 2.0);
        let dh = 1e-6;
        let slope = (labor_disutility(h + dh, psi, theta) - labor_disutility(h - dh, psi, theta))
            / (2.0 * dh);

        assert_relative_eq!(slope, psi * h.powf(1.0 / theta), epsilon = 1e-8);
    }
}
