//! Measurement Input and Validation
//!
//! ## Overview
//!
//! A [`MeasurementSet`] is the only input the engine accepts. It can only be
//! built through a validating constructor, so holding one is proof that all
//! five values are finite and strictly positive.
//!
//! Two entry points exist:
//!
//! - [`MeasurementSet::new`] for callers that already have numbers
//! - [`MeasurementSet::parse`] for raw text straight from a form or command line
//!
//! Both check the fields in declaration order and stop at the first bad one.
//!
//! ## Field Names
//!
//! Each [`Field`] has an English name (`mass`) and the key used by the
//! original input form (`pesoBebe`). Error messages carry both so either kind
//! of front end can point the user at the right input.
//!
//! ```rust
//! use birthforce_core::{MeasurementSet, RawMeasurements, Field};
//!
//! let raw = RawMeasurements {
//!     mass: "3.5",
//!     canal_length: "0.15",
//!     fluid_height: "0.30",
//!     fluid_density: "1006",
//!     contraction_pressure: "abc",
//! };
//!
//! let err = MeasurementSet::parse(&raw).unwrap_err();
//! assert_eq!(err.field(), Field::ContractionPressure);
//! ```

use core::fmt;

use crate::{
    constants::defaults::{
        DEFAULT_CANAL_LENGTH_M, DEFAULT_CONTRACTION_PRESSURE_MMHG, DEFAULT_FLUID_DENSITY_KG_PER_M3,
        DEFAULT_FLUID_HEIGHT_M, DEFAULT_MASS_KG,
    },
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// One of the five measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Infant mass (kg)
    Mass,
    /// Birth canal length (m)
    CanalLength,
    /// Amniotic fluid column height (m)
    FluidHeight,
    /// Amniotic fluid density (kg/m³)
    FluidDensity,
    /// Uterine contraction pressure (mmHg)
    ContractionPressure,
}

impl Field {
    /// All fields, in validation order
    pub const ALL: [Field; 5] = [
        Field::Mass,
        Field::CanalLength,
        Field::FluidHeight,
        Field::FluidDensity,
        Field::ContractionPressure,
    ];

    /// English snake_case name
    pub const fn name(self) -> &'static str {
        match self {
            Field::Mass => "mass",
            Field::CanalLength => "canal_length",
            Field::FluidHeight => "fluid_height",
            Field::FluidDensity => "fluid_density",
            Field::ContractionPressure => "contraction_pressure",
        }
    }

    /// Key of the matching input in the original form
    pub const fn form_key(self) -> &'static str {
        match self {
            Field::Mass => "pesoBebe",
            Field::CanalLength => "alturaCanal",
            Field::FluidHeight => "alturaUterina",
            Field::FluidDensity => "densidadLiquido",
            Field::ContractionPressure => "fuerzaContraccion",
        }
    }

    /// Unit symbol the value is expressed in
    pub const fn unit(self) -> &'static str {
        match self {
            Field::Mass => "kg",
            Field::CanalLength | Field::FluidHeight => "m",
            Field::FluidDensity => "kg/m³",
            Field::ContractionPressure => "mmHg",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.form_key())
    }
}

/// Unparsed measurement text, one slice per field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMeasurements<'a> {
    /// Infant mass text (kg)
    pub mass: &'a str,
    /// Canal length text (m)
    pub canal_length: &'a str,
    /// Fluid column height text (m)
    pub fluid_height: &'a str,
    /// Fluid density text (kg/m³)
    pub fluid_density: &'a str,
    /// Contraction pressure text (mmHg)
    pub contraction_pressure: &'a str,
}

impl<'a> RawMeasurements<'a> {
    fn get(&self, field: Field) -> &'a str {
        match field {
            Field::Mass => self.mass,
            Field::CanalLength => self.canal_length,
            Field::FluidHeight => self.fluid_height,
            Field::FluidDensity => self.fluid_density,
            Field::ContractionPressure => self.contraction_pressure,
        }
    }
}

/// Validated input to the physics engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedMeasurements"))]
pub struct MeasurementSet {
    mass_kg: f64,
    canal_length_m: f64,
    fluid_height_m: f64,
    fluid_density_kg_per_m3: f64,
    contraction_pressure_mmhg: f64,
}

impl MeasurementSet {
    /// Validate five numeric measurements
    ///
    /// Fields are checked in [`Field::ALL`] order; the first invalid one is reported.
    pub fn new(
        mass_kg: f64,
        canal_length_m: f64,
        fluid_height_m: f64,
        fluid_density_kg_per_m3: f64,
        contraction_pressure_mmhg: f64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            mass_kg: check(Field::Mass, mass_kg)?,
            canal_length_m: check(Field::CanalLength, canal_length_m)?,
            fluid_height_m: check(Field::FluidHeight, fluid_height_m)?,
            fluid_density_kg_per_m3: check(Field::FluidDensity, fluid_density_kg_per_m3)?,
            contraction_pressure_mmhg: check(Field::ContractionPressure, contraction_pressure_mmhg)?,
        })
    }

    /// Parse and validate raw text
    ///
    /// Surrounding whitespace is ignored. Each field must be a complete
    /// number; trailing garbage such as `"3.5kg"` is rejected. A field is
    /// parsed and checked before the next one is looked at.
    pub fn parse(raw: &RawMeasurements<'_>) -> ValidationResult<Self> {
        let mut values = [0.0f64; 5];
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            *slot = check(field, parse_field(field, raw.get(field))?)?;
        }
        let [mass_kg, canal_length_m, fluid_height_m, fluid_density_kg_per_m3, contraction_pressure_mmhg] =
            values;
        Ok(Self {
            mass_kg,
            canal_length_m,
            fluid_height_m,
            fluid_density_kg_per_m3,
            contraction_pressure_mmhg,
        })
    }

    /// Infant mass (kg)
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Birth canal length (m)
    pub fn canal_length_m(&self) -> f64 {
        self.canal_length_m
    }

    /// Amniotic fluid column height (m)
    pub fn fluid_height_m(&self) -> f64 {
        self.fluid_height_m
    }

    /// Amniotic fluid density (kg/m³)
    pub fn fluid_density_kg_per_m3(&self) -> f64 {
        self.fluid_density_kg_per_m3
    }

    /// Uterine contraction pressure (mmHg)
    pub fn contraction_pressure_mmhg(&self) -> f64 {
        self.contraction_pressure_mmhg
    }

    /// Value of a single field
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Mass => self.mass_kg,
            Field::CanalLength => self.canal_length_m,
            Field::FluidHeight => self.fluid_height_m,
            Field::FluidDensity => self.fluid_density_kg_per_m3,
            Field::ContractionPressure => self.contraction_pressure_mmhg,
        }
    }
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self {
            mass_kg: DEFAULT_MASS_KG,
            canal_length_m: DEFAULT_CANAL_LENGTH_M,
            fluid_height_m: DEFAULT_FLUID_HEIGHT_M,
            fluid_density_kg_per_m3: DEFAULT_FLUID_DENSITY_KG_PER_M3,
            contraction_pressure_mmhg: DEFAULT_CONTRACTION_PRESSURE_MMHG,
        }
    }
}

/// Wire shape used to deserialize a [`MeasurementSet`] through validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedMeasurements {
    mass_kg: f64,
    canal_length_m: f64,
    fluid_height_m: f64,
    fluid_density_kg_per_m3: f64,
    contraction_pressure_mmhg: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedMeasurements> for MeasurementSet {
    type Error = ValidationError;

    fn try_from(raw: UncheckedMeasurements) -> ValidationResult<Self> {
        Self::new(
            raw.mass_kg,
            raw.canal_length_m,
            raw.fluid_height_m,
            raw.fluid_density_kg_per_m3,
            raw.contraction_pressure_mmhg,
        )
    }
}

fn parse_field(field: Field, text: &str) -> ValidationResult<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        log_warn!("rejected {}: {:?} is not a number", field.name(), text);
        ValidationError::NotANumber { field }
    })
}

fn check(field: Field, value: f64) -> ValidationResult<f64> {
    if !value.is_valid() {
        log_warn!("rejected {}: non-finite value", field.name());
        return Err(ValidationError::NonFinite { field });
    }

    if !value.is_positive_physical() {
        log_warn!("rejected {}: {} is not positive", field.name(), value);
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(value)
}
