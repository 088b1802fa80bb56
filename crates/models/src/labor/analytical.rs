use super::Parameters;

/// Equilibrium hours in closed form.
///
/// Combining the firm's first-order condition `w = (1-alpha) z L^(-alpha)`,
/// goods market clearing `c = z L^(1-alpha)` and the household's
/// `w c^(-gamma) = psi h^(1/theta)` at `L = h` gives
/// `h = ((1-alpha) z^(1-gamma) / psi)^(1 / (1/theta + alpha + gamma (1-alpha)))`.
#[must_use]
pub fn analytical_hours(params: &Parameters) -> f64 {
    let (alpha, z) = (params.technology().alpha(), params.technology().z());
    let prefs = params.preferences();
    let exponent = 1.0 / prefs.theta() + alpha + prefs.gamma() * (1.0 - alpha);
    ((1.0 - alpha) * z.powf(1.0 - prefs.gamma()) / prefs.psi()).powf(1.0 / exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_economy() {
        // (0.64 / 0.5)^(1 / 2.64)
        assert_relative_eq!(
            analytical_hours(&Parameters::default()),
            1.28_f64.powf(1.0 / 2.64),
            epsilon = 1e-14
        );
    }
}
