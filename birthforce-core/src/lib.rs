//! Core physics engine for Birthforce
//!
//! Compares the biomechanics of labour in the vertical and supine maternal
//! positions. Five measurements go in; force, work, hydrostatic pressure and
//! total effective pressure for each position come out, along with the
//! comparisons a presentation layer turns into conclusions.
//!
//! Key properties:
//! - Pure and stateless: no I/O, no caching, no interior mutability
//! - No heap allocation; builds without `std`
//! - Validation happens once, at the [`MeasurementSet`] boundary
//!
//! ```no_run
//! use birthforce_core::{compute_comparison_from_text, RawMeasurements};
//!
//! let raw = RawMeasurements {
//!     mass: "3.5",
//!     canal_length: "0.15",
//!     fluid_height: "0.30",
//!     fluid_density: "1006",
//!     contraction_pressure: "50",
//! };
//!
//! match compute_comparison_from_text(&raw) {
//!     Ok(report) => {}, // Hand to a renderer
//!     Err(e) => {},     // Point the user at e.field()
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod analysis;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod formulas;
pub mod measurements;
pub mod position;
pub mod report;
pub mod traits;

// Public API
pub use analysis::{Finding, GeneralConclusion, Metric, MetricComparison, FINDING_COUNT};
pub use engine::{compute_comparison, compute_comparison_from_text};
pub use errors::{ValidationError, ValidationResult};
pub use measurements::{Field, MeasurementSet, RawMeasurements};
pub use position::Position;
pub use report::{ComparativeReport, Comparison, ComputationResult, Pressure};
pub use traits::Validatable;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
