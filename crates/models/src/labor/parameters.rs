use crate::{firm::CobbDouglas, parameter::ParameterError};

use super::Preferences;

/// Parameters of the labor-supply economy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parameters {
    technology: CobbDouglas,
    preferences: Preferences,
}

impl Parameters {
    /// Creates validated parameters.
    ///
    /// `alpha` and `z` describe the firm (see [`CobbDouglas::new`]); `gamma`,
    /// `theta` and `psi` the household (see [`Preferences::new`]).
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first invalid field.
    pub fn new(
        alpha: f64,
        z: f64,
        gamma: f64,
        theta: f64,
        psi: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            technology: CobbDouglas::new(alpha, z)?,
            preferences: Preferences::new(gamma, theta, psi)?,
        })
    }

    #[must_use]
    pub fn technology(&self) -> &CobbDouglas {
        &self.technology
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}
