//! Default Measurements
//!
//! Typical term-pregnancy values. These are what the calculator starts from
//! and what a reset returns to.

/// Infant mass at term (kg).
pub const DEFAULT_MASS_KG: f64 = 3.5;

/// Birth canal length travelled during descent (m).
pub const DEFAULT_CANAL_LENGTH_M: f64 = 0.15;

/// Height of the amniotic fluid column above the presenting part (m).
pub const DEFAULT_FLUID_HEIGHT_M: f64 = 0.30;

/// Amniotic fluid density (kg/m³).
///
/// Slightly denser than water because of dissolved solutes and cells.
pub const DEFAULT_FLUID_DENSITY_KG_PER_M3: f64 = 1006.0;

/// Intrauterine pressure during an active-labour contraction (mmHg).
pub const DEFAULT_CONTRACTION_PRESSURE_MMHG: f64 = 50.0;
