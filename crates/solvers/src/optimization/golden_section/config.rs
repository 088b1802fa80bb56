use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Controls how [`maximize_half_line`](super::maximize_half_line) grows an
/// upper bound.
///
/// The first trial upper bound is `lower + initial_width`; each doubling
/// moves it twice as far from `lower`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expansion {
    initial_width: f64,
    max_doublings: usize,
}

/// Errors from validating solver configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("initial_width must be finite and positive")]
    InitialWidth,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }
}

impl Default for Expansion {
    fn default() -> Self {
        Self {
            initial_width: 1.0,
            max_doublings: 60,
        }
    }
}

impl Expansion {
    /// Creates a validated expansion rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InitialWidth`] unless `initial_width` is finite
    /// and positive.
    pub fn new(initial_width: f64, max_doublings: usize) -> Result<Self, ConfigError> {
        if !initial_width.is_finite() || initial_width <= 0.0 {
            return Err(ConfigError::InitialWidth);
        }
        Ok(Self {
            initial_width,
            max_doublings,
        })
    }

    #[must_use]
    pub fn initial_width(&self) -> f64 {
        self.initial_width
    }

    #[must_use]
    pub fn max_doublings(&self) -> usize {
        self.max_doublings
    }
}
