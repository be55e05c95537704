//! Maternal Position Model
//!
//! Two positions, each a fixed policy rather than a simulation:
//!
//! ```text
//! Position   Work angle   Hydrostatic pressure
//! ---------------------------------------------------
//! Vertical   0°           ρ·g·h (full column)
//! Supine     90°          0.30 × ρ·g·h
//! ```
//!
//! The supine derating stands in for the shorter effective fluid column when
//! the mother lies on her back. It is an empirical factor and is applied to
//! the pressure in pascals, before any unit conversion.

use core::fmt;

use crate::constants::physics::{
    SUPINE_PRESSURE_FACTOR, SUPINE_WORK_ANGLE_DEG, VERTICAL_WORK_ANGLE_DEG,
};

/// Maternal position during labour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Position {
    /// Upright: gravity aligned with descent
    Vertical,
    /// Lying on the back: gravity across the descent path
    Supine,
}

impl Position {
    /// Both positions, vertical first
    pub const ALL: [Position; 2] = [Position::Vertical, Position::Supine];

    /// Angle between the infant's weight and its path (degrees)
    pub const fn work_angle_deg(self) -> f64 {
        match self {
            Position::Vertical => VERTICAL_WORK_ANGLE_DEG,
            Position::Supine => SUPINE_WORK_ANGLE_DEG,
        }
    }

    /// Fraction of the full-column hydrostatic pressure felt in this position
    pub const fn pressure_factor(self) -> f64 {
        match self {
            Position::Vertical => 1.0,
            Position::Supine => SUPINE_PRESSURE_FACTOR,
        }
    }

    /// Hydrostatic pressure in this position given the full-column value (Pa)
    pub fn effective_pressure_pa(self, full_column_pa: f64) -> f64 {
        match self {
            Position::Vertical => full_column_pa,
            Position::Supine => full_column_pa * SUPINE_PRESSURE_FACTOR,
        }
    }

    /// Label used in reports and findings
    pub const fn label(self) -> &'static str {
        match self {
            Position::Vertical => "vertical",
            Position::Supine => "supina",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
