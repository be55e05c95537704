//! Common test fixtures for integration tests
//!
//! Named measurement scenarios and small assertion helpers shared by the
//! integration test files.

#![allow(dead_code)]

use birthforce_core::{MeasurementSet, RawMeasurements};

/// Relative tolerance for comparing against hand-computed values
pub const REL_TOLERANCE: f64 = 1e-9;

/// A named set of measurements with a short description
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub measurements: MeasurementSet,
}

/// Pre-built scenario definitions
pub struct Scenarios;

impl Scenarios {
    /// Term infant, typical labour (the calculator defaults)
    pub fn term_default() -> Scenario {
        Scenario {
            name: "term_default",
            description: "3.5 kg, 0.15 m canal, 0.30 m column, 1006 kg/m³, 50 mmHg",
            measurements: MeasurementSet::default(),
        }
    }

    /// Small preterm infant with a weak contraction
    pub fn preterm_weak_contraction() -> Scenario {
        Scenario {
            name: "preterm_weak_contraction",
            description: "1.8 kg, 0.10 m canal, 0.20 m column, 1004 kg/m³, 25 mmHg",
            measurements: measurements(1.8, 0.10, 0.20, 1004.0, 25.0),
        }
    }

    /// Large infant with a strong contraction
    pub fn macrosomic_strong_contraction() -> Scenario {
        Scenario {
            name: "macrosomic_strong_contraction",
            description: "4.8 kg, 0.18 m canal, 0.35 m column, 1008 kg/m³, 90 mmHg",
            measurements: measurements(4.8, 0.18, 0.35, 1008.0, 90.0),
        }
    }

    /// Every scenario above
    pub fn all() -> Vec<Scenario> {
        vec![
            Self::term_default(),
            Self::preterm_weak_contraction(),
            Self::macrosomic_strong_contraction(),
        ]
    }
}

/// Build a measurement set that is known to be valid
pub fn measurements(mass: f64, canal: f64, height: f64, density: f64, contraction: f64) -> MeasurementSet {
    MeasurementSet::new(mass, canal, height, density, contraction)
        .expect("fixture measurements must be valid")
}

/// Raw text equal to the calculator defaults
pub fn default_raw() -> RawMeasurements<'static> {
    RawMeasurements {
        mass: "3.5",
        canal_length: "0.15",
        fluid_height: "0.30",
        fluid_density: "1006",
        contraction_pressure: "50",
    }
}
