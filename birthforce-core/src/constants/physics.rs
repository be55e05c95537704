//! Physical Constants for Birthforce
//!
//! Fundamental constants and fixed model parameters used by the formula
//! primitives and the position model. The model is intentionally simple:
//! every value here is part of the contract and must not be tuned at runtime.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Gravitational acceleration used by every formula (m/s²).
///
/// The rounded classroom value, not standard gravity (9.80665). Reported
/// forces and pressures are calibrated against this value.
pub const GRAVITY_M_PER_S2: f64 = 9.8;

/// Pascals per millimetre of mercury (Pa/mmHg).
///
/// Clinical pressures are reported in mmHg; everything inside the engine is
/// computed in pascals and converted at the reporting boundary.
///
/// Source: conventional 0 °C mercury column, 133.322 387 Pa (truncated)
pub const PA_PER_MMHG: f64 = 133.322;

// ===== POSITION MODEL =====

/// Angle between gravity and the descent path when upright (degrees).
///
/// Force and displacement are aligned, so all of F·d is useful work.
pub const VERTICAL_WORK_ANGLE_DEG: f64 = 0.0;

/// Angle between gravity and the descent path when lying down (degrees).
///
/// Force and displacement are orthogonal, so gravity contributes no work.
pub const SUPINE_WORK_ANGLE_DEG: f64 = 90.0;

/// Share of the upright hydrostatic pressure retained when supine.
///
/// Empirical derating for the shorter effective fluid column when the
/// mother lies down. Applied to the pressure in pascals before conversion
/// to mmHg.
pub const SUPINE_PRESSURE_FACTOR: f64 = 0.30;

// ===== NUMERICS =====

/// Degrees in a full turn, used when reducing angles to a quadrant.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Degrees in a quarter turn.
pub const QUARTER_TURN_DEG: f64 = 90.0;
