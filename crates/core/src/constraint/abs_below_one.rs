use std::{cmp::Ordering, ops::Neg};

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing `-1 < x < 1`.
///
/// This is the stationarity condition on the persistence of an AR(1) process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AbsBelowOne;

impl AbsBelowOne {
    /// Constructs `Constrained<T, AbsBelowOne>` if `-1 < value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to minus one.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + One + Neg<Output = T>>(
        value: T,
    ) -> Result<Constrained<T, AbsBelowOne>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + One + Neg<Output = T>> Constraint<T> for AbsBelowOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&-T::one()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_persistence_inside_unit_circle() {
        assert!(AbsBelowOne::new(0.0).is_ok());
        assert!(AbsBelowOne::new(0.95).is_ok());
        assert!(AbsBelowOne::new(-0.5).is_ok());
    }

    #[test]
    fn rejects_unit_root_and_beyond() {
        assert_eq!(AbsBelowOne::new(1.0), Err(ConstraintError::AboveMaximum));
        assert_eq!(AbsBelowOne::new(-1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AbsBelowOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
