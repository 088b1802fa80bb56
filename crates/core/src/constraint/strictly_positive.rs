use std::cmp::Ordering;

use num_traits::{ToPrimitive, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (`x > 0`) and finite.
///
/// Used for quantities such as total factor productivity, risk aversion,
/// and household counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is below zero.
    /// - [`ConstraintError::Zero`] if the value is zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    /// - [`ConstraintError::NotFinite`] if the value is infinite.
    pub fn new<T: PartialOrd + Zero + ToPrimitive>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + ToPrimitive> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => super::finite(value),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert!(StrictlyPositive::new(2.0).is_ok());
        assert!(StrictlyPositive::new(1_u32).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1.5), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn rejects_infinity() {
        assert_eq!(
            StrictlyPositive::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        );
        assert!(StrictlyPositive::new(f64::MAX).is_ok());
        assert!(StrictlyPositive::new(u32::MAX).is_ok());
    }
}
