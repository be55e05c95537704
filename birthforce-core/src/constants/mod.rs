//! Constants for Birthforce Core
//!
//! Centralized, documented constants used throughout the engine. Formula code
//! never contains magic numbers; it refers to these.
//!
//! ## Organization
//!
//! - **Physics**: gravity, unit conversion and the fixed position model
//! - **Defaults**: the measurement set the calculator starts from
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of literals
//! 2. Include units in every name
//! 3. Document where a value comes from when it is not a definition

/// Physical constants and the fixed parameters of the position model.
pub mod physics;

/// Default measurement values (term infant, typical labour).
pub mod defaults;

// Re-export commonly used constants for convenience
pub use physics::{
    GRAVITY_M_PER_S2, PA_PER_MMHG, SUPINE_PRESSURE_FACTOR,
    VERTICAL_WORK_ANGLE_DEG, SUPINE_WORK_ANGLE_DEG,
};

pub use defaults::{
    DEFAULT_MASS_KG, DEFAULT_CANAL_LENGTH_M, DEFAULT_FLUID_HEIGHT_M,
    DEFAULT_FLUID_DENSITY_KG_PER_M3, DEFAULT_CONTRACTION_PRESSURE_MMHG,
};
