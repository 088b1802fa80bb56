use super::WealthError;

/// Mean and variance of `exp(X)` for `X ~ N(mu, sigma^2)`.
#[must_use]
pub fn lognormal_moments(mu: f64, sigma: f64) -> (f64, f64) {
    let s2 = sigma * sigma;
    let mean = (mu + s2 / 2.0).exp();
    let var = (s2.exp() - 1.0) * (2.0 * mu + s2).exp();
    (mean, var)
}

/// Gini coefficient of a sample.
///
/// With the sample sorted ascending as `x_(1) ≤ ... ≤ x_(N)`,
/// `G = 2 Σ i x_(i) / (N Σ x) - (N + 1) / N`.
///
/// # Errors
///
/// Fails if the sample is empty or its total is not positive.
#[allow(clippy::cast_precision_loss)]
pub fn gini(sample: &[f64]) -> Result<f64, WealthError> {
    if sample.is_empty() {
        return Err(WealthError::EmptySample);
    }

    let total: f64 = sample.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(WealthError::NonPositiveTotal { total });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (i + 1) as f64 * x)
        .sum();

    Ok(2.0 * weighted / (n * total) - (n + 1.0) / n)
}
