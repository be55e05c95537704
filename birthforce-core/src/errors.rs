//! Error Types for Measurement Validation
//!
//! ## Design Philosophy
//!
//! The engine has exactly one failure mode: a measurement that cannot be
//! used. Once a [`MeasurementSet`](crate::MeasurementSet) exists, every formula
//! is a total function over positive finite reals, so nothing downstream of
//! validation returns an error.
//!
//! Errors stay small and `Copy`, carrying no heap data: the offending
//! [`Field`] and, where meaningful, the rejected value. A presentation layer
//! can build its own message from the field name without parsing strings.
//!
//! ## Error Categories
//!
//! - `NotANumber`: raw text did not parse as a number
//! - `NonFinite`: the value is NaN or infinite
//! - `NotPositive`: the value is zero or negative
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use birthforce_core::{MeasurementSet, ValidationError};
//!
//! match MeasurementSet::new(0.0, 0.15, 0.30, 1006.0, 50.0) {
//!     Ok(_) => unreachable!(),
//!     Err(ValidationError::NotPositive { field, .. }) => {
//!         assert_eq!(field.name(), "mass");
//!     }
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

use crate::measurements::Field;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a measurement is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Raw input could not be parsed as a number
    #[error("{field}: not a valid number")]
    NotANumber {
        /// The measurement that failed to parse
        field: Field,
    },

    /// Value is NaN or infinite
    #[error("{field}: value must be finite")]
    NonFinite {
        /// The measurement holding the non-finite value
        field: Field,
    },

    /// Value is zero or negative
    #[error("{field}: value {value} must be greater than zero")]
    NotPositive {
        /// The measurement holding the value
        field: Field,
        /// The rejected value
        value: f64,
    },
}

impl ValidationError {
    /// The measurement this error refers to
    pub fn field(&self) -> Field {
        match *self {
            Self::NotANumber { field }
            | Self::NonFinite { field }
            | Self::NotPositive { field, .. } => field,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotANumber { field } =>
                defmt::write!(fmt, "{}: not a number", field.name()),
            Self::NonFinite { field } =>
                defmt::write!(fmt, "{}: not finite", field.name()),
            Self::NotPositive { field, value } =>
                defmt::write!(fmt, "{}: {} must be > 0", field.name(), value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessor_covers_every_variant() {
        let errors = [
            ValidationError::NotANumber { field: Field::Mass },
            ValidationError::NonFinite { field: Field::FluidHeight },
            ValidationError::NotPositive { field: Field::FluidDensity, value: -2.0 },
        ];

        let fields: [Field; 3] = [errors[0].field(), errors[1].field(), errors[2].field()];
        assert_eq!(fields, [Field::Mass, Field::FluidHeight, Field::FluidDensity]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn message_names_the_field() {
        let err = ValidationError::NotPositive { field: Field::Mass, value: 0.0 };
        let message = err.to_string();
        assert!(message.contains("mass"));
        assert!(message.contains("pesoBebe"));
    }
}
