use gemac_core::constraint::{OpenUnitInterval, StrictlyPositive};

use crate::{
    firm::CobbDouglas,
    parameter::{ParameterError, checked},
};

/// Parameters of the OLG economy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    technology: CobbDouglas,
    beta: f64,
    gamma: f64,
    households: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            technology: CobbDouglas::default(),
            beta: 0.96,
            gamma: 2.0,
            households: 1,
        }
    }
}

impl Parameters {
    /// Creates validated parameters.
    ///
    /// - `alpha`: capital share, in `(0, 1)`
    /// - `z`: TFP, positive
    /// - `beta`: discount factor, in `(0, 1)`
    /// - `gamma`: relative risk aversion, positive
    /// - `households`: size of each cohort, at least one
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first invalid field.
    pub fn new(
        alpha: f64,
        z: f64,
        beta: f64,
        gamma: f64,
        households: u32,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            technology: CobbDouglas::new(alpha, z)?,
            beta: checked::<_, OpenUnitInterval>("beta", beta)?,
            gamma: checked::<_, StrictlyPositive>("gamma", gamma)?,
            households: checked::<_, StrictlyPositive>("households", households)?,
        })
    }

    #[must_use]
    pub fn technology(&self) -> &CobbDouglas {
        &self.technology
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.technology.alpha()
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.technology.z()
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[must_use]
    pub fn households(&self) -> u32 {
        self.households
    }
}
