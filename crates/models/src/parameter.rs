use gemac_core::constraint::{Constrained, Constraint, ConstraintError};
use thiserror::Error;

/// A model parameter outside its economic domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid parameter `{field}`: {source}")]
pub struct ParameterError {
    /// Name of the offending parameter.
    pub field: &'static str,
    #[source]
    pub source: ConstraintError,
}

impl ParameterError {
    pub(crate) fn new(field: &'static str, source: ConstraintError) -> Self {
        Self { field, source }
    }
}

/// Checks `value` against constraint `C`, naming `field` on failure.
pub(crate) fn checked<T, C: Constraint<T>>(
    field: &'static str,
    value: T,
) -> Result<T, ParameterError> {
    Constrained::<T, C>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| ParameterError::new(field, source))
}

/// Rejects NaN and infinite values for parameters with no other bound.
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_nan() {
        Err(ParameterError::new(field, ConstraintError::NotANumber))
    } else if value.is_infinite() {
        Err(ParameterError::new(field, ConstraintError::NotFinite))
    } else {
        Ok(value)
    }
}
