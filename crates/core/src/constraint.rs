//! Numeric constraints checked once, at construction.
//!
//! Model parameters only make economic sense inside certain ranges: a
//! discount factor lies in `(0, 1)`, risk aversion is strictly positive, an
//! autoregressive coefficient must satisfy `|rho| < 1` for the process to be
//! stationary. Wrapping a value in [`Constrained<T, C>`] proves the check
//! happened, so downstream formulas can trust their inputs.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: zero or greater, and finite
//! - [`StrictlyPositive`]: greater than zero, and finite
//! - [`OpenUnitInterval`]: strictly between zero and one
//! - [`AbsBelowOne`]: strictly between minus one and one
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod abs_below_one;
mod non_negative;
mod open_unit_interval;
mod strictly_positive;

use std::marker::PhantomData;

use num_traits::ToPrimitive;
use thiserror::Error;

pub use abs_below_one::AbsBelowOne;
pub use non_negative::NonNegative;
pub use open_unit_interval::OpenUnitInterval;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use gemac_core::constraint::{Constrained, OpenUnitInterval};
///
/// let beta = Constrained::<f64, OpenUnitInterval>::new(0.96).unwrap();
/// assert_eq!(beta.into_inner(), 0.96);
///
/// assert!(Constrained::<f64, OpenUnitInterval>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Rejects values with no finite `f64` representation.
///
/// Integers always pass; floats fail on infinity.
fn finite<T: ToPrimitive>(value: &T) -> Result<(), ConstraintError> {
    match value.to_f64() {
        Some(v) if v.is_finite() => Ok(()),
        _ => Err(ConstraintError::NotFinite),
    }
}
