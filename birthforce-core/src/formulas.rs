//! Formula Primitives for Labour Biomechanics
//!
//! ## Physics Background
//!
//! The calculator reduces labour to four textbook laws. Each primitive below
//! is one of them, evaluated in SI units with `f64` arithmetic:
//!
//! ```text
//! Weight of the infant         F = m × g
//! Work along the canal         W = F × d × cos(θ)
//! Fluid column pressure        P = ρ × g × h
//! Moment about a lever arm     τ = r × F × sin(θ)
//! ```
//!
//! ### Work and the Descent Angle
//!
//! θ is the angle between the weight vector and the direction the infant
//! travels. Upright, the canal points down and θ = 0°, so the full F·d is
//! delivered. Lying supine, the canal runs roughly horizontal and θ = 90°:
//! gravity pulls across the path and contributes nothing.
//!
//! Evaluating `cos(π/2)` in floating point yields ~6.1e-17 rather than zero.
//! Angles on a quarter turn are therefore resolved exactly, so supine work is
//! `0.0` and compares as such.
//!
//! ### Units
//!
//! | Quantity  | Internal | Reported |
//! |-----------|----------|----------|
//! | Force     | N        | N        |
//! | Work      | J        | J        |
//! | Pressure  | Pa       | Pa, mmHg |
//!
//! Only pressures change unit, and only when reported: 1 mmHg = 133.322 Pa.
//!
//! ## Why libm?
//!
//! The crate builds without `std`, where `f64::cos` is unavailable. `libm`
//! provides the same functions everywhere.

use core::f64::consts::PI;

use crate::constants::physics::{FULL_TURN_DEG, GRAVITY_M_PER_S2, PA_PER_MMHG, QUARTER_TURN_DEG};

/// Weight of a mass under [`GRAVITY_M_PER_S2`], in newtons
pub fn gravitational_force(mass_kg: f64) -> f64 {
    mass_kg * GRAVITY_M_PER_S2
}

/// Work done by `force_n` over `distance_m` at `angle_deg` between force and displacement
///
/// `angle_deg = 0` yields `force × distance`; `angle_deg = 90` yields exactly `0.0`.
pub fn mechanical_work(force_n: f64, distance_m: f64, angle_deg: f64) -> f64 {
    force_n * distance_m * cos_deg(angle_deg)
}

/// Pressure at the bottom of a fluid column, in pascals
pub fn hydrostatic_pressure(density_kg_per_m3: f64, height_m: f64) -> f64 {
    density_kg_per_m3 * GRAVITY_M_PER_S2 * height_m
}

/// Moment of `force_n` applied at `radius_m` with `angle_deg` between arm and force
///
/// Available as a primitive; the comparative report does not use it.
pub fn torque(radius_m: f64, force_n: f64, angle_deg: f64) -> f64 {
    radius_m * force_n * sin_deg(angle_deg)
}

/// Convert pascals to millimetres of mercury
pub fn pa_to_mmhg(pressure_pa: f64) -> f64 {
    pressure_pa / PA_PER_MMHG
}

/// Convert millimetres of mercury to pascals
pub fn mmhg_to_pa(pressure_mmhg: f64) -> f64 {
    pressure_mmhg * PA_PER_MMHG
}

/// Effective pressure on the infant: contraction plus fluid column, both in mmHg
pub fn total_pressure(uterine_mmhg: f64, hydrostatic_mmhg: f64) -> f64 {
    uterine_mmhg + hydrostatic_mmhg
}

/// Cosine of an angle in degrees, exact on quarter turns
pub fn cos_deg(angle_deg: f64) -> f64 {
    match quarter_turn(angle_deg) {
        Some(0) => 1.0,
        Some(1) | Some(3) => 0.0,
        Some(_) => -1.0,
        None => libm::cos(angle_deg * PI / 180.0),
    }
}

/// Sine of an angle in degrees, exact on quarter turns
pub fn sin_deg(angle_deg: f64) -> f64 {
    match quarter_turn(angle_deg) {
        Some(0) | Some(2) => 0.0,
        Some(1) => 1.0,
        Some(_) => -1.0,
        None => libm::sin(angle_deg * PI / 180.0),
    }
}

/// Index 0..=3 of the quarter turn `angle_deg` lands on, if it lands on one
fn quarter_turn(angle_deg: f64) -> Option<u8> {
    if !angle_deg.is_finite() {
        return None;
    }

    let mut reduced = libm::fmod(angle_deg, FULL_TURN_DEG);
    if reduced < 0.0 {
        reduced += FULL_TURN_DEG;
    }

    if libm::fmod(reduced, QUARTER_TURN_DEG) != 0.0 {
        return None;
    }

    // reduced is one of 0, 90, 180, 270 (or 360 after adding a tiny negative)
    Some(((reduced / QUARTER_TURN_DEG) as u8) % 4)
}
