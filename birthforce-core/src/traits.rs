//! Core traits for measurement checks
//!
//! Kept deliberately small: the engine only needs to know whether a number
//! can enter the physical model.

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;

    /// Check if the value is a usable, strictly positive number
    fn is_positive_physical(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }

    fn is_positive_physical(&self) -> bool {
        self.is_valid() && *self > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }

    #[test]
    fn positive_physical_rejects_zero_and_negatives() {
        assert!(3.5f64.is_positive_physical());
        assert!(f64::MIN_POSITIVE.is_positive_physical());
        assert!(!0.0f64.is_positive_physical());
        assert!(!(-0.0f64).is_positive_physical());
        assert!(!(-1.0f64).is_positive_physical());
        assert!(!f64::INFINITY.is_positive_physical());
    }
}
