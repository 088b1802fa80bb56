//! A competitive firm with Cobb-Douglas technology `Y = z K^alpha L^(1-alpha)`.

use gemac_core::constraint::{OpenUnitInterval, StrictlyPositive};
use thiserror::Error;

use crate::parameter::{ParameterError, checked};

/// A price the firm cannot take.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FirmError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidPrice { name: &'static str, value: f64 },
}

/// Cobb-Douglas technology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CobbDouglas {
    alpha: f64,
    z: f64,
}

/// Factor prices implied by a capital-labor ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorPrices {
    /// Net return on capital.
    pub r: f64,
    /// Wage.
    pub w: f64,
}

/// Labor demand of a firm whose capital is fixed at one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaborDemand {
    pub labor: f64,
    pub output: f64,
    pub profit: f64,
}

impl Default for CobbDouglas {
    fn default() -> Self {
        Self { alpha: 0.36, z: 1.0 }
    }
}

impl CobbDouglas {
    /// Creates a technology with capital share `alpha` and TFP `z`.
    ///
    /// # Errors
    ///
    /// Fails unless `0 < alpha < 1` and `z > 0`.
    pub fn new(alpha: f64, z: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            alpha: checked::<_, OpenUnitInterval>("alpha", alpha)?,
            z: checked::<_, StrictlyPositive>("z", z)?,
        })
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[must_use]
    pub fn output(&self, capital: f64, labor: f64) -> f64 {
        self.z * capital.powf(self.alpha) * labor.powf(1.0 - self.alpha)
    }

    /// Marginal products at capital-labor ratio `k`.
    ///
    /// # Errors
    ///
    /// Fails if `k` is not positive and finite.
    pub fn factor_prices(&self, k: f64) -> Result<FactorPrices, FirmError> {
        positive("capital-labor ratio", k)?;
        Ok(FactorPrices {
            r: self.alpha * self.z * k.powf(self.alpha - 1.0),
            w: (1.0 - self.alpha) * self.z * k.powf(self.alpha),
        })
    }

    /// Profit-maximizing labor at wage `w`, with capital fixed at one.
    ///
    /// # Errors
    ///
    /// Fails if `w` is not positive and finite.
    pub fn labor_demand(&self, w: f64) -> Result<LaborDemand, FirmError> {
        positive("wage", w)?;
        let labor = ((1.0 - self.alpha) * self.z / w).powf(1.0 / self.alpha);
        let output = self.output(1.0, labor);
        Ok(LaborDemand {
            labor,
            output,
            profit: output - w * labor,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), FirmError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FirmError::InvalidPrice { name, value })
    }
}
