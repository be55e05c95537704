//! Number formatting and expanded formula lines
//!
//! ## Display Precision
//!
//! ```text
//! Quantity              Decimals   Example
//! --------------------------------------------------
//! Force                 2          34.30 N
//! Work                  4          5.1450 J
//! Pressure (Pa, mmHg)   2          2957.64 Pa ≈ 22.18 mmHg
//! Percentages           1          70.0%
//! ```
//!
//! Input measurements are echoed in their shortest form (`3.5`, `1006`,
//! `0.3`), as the user typed them, inside the expanded formulas.

use birthforce_core::{
    constants::physics::GRAVITY_M_PER_S2, formulas::cos_deg, ComparativeReport, Position,
    Pressure,
};

/// Force in newtons, 2 decimals
pub fn force(newtons: f64) -> String {
    format!("{:.2} N", newtons)
}

/// Work in joules, 4 decimals
pub fn work(joules: f64) -> String {
    format!("{:.4} J", joules)
}

/// Pressure in mmHg, 2 decimals
pub fn mmhg(value: f64) -> String {
    format!("{:.2} mmHg", value)
}

/// Pressure in both units
pub fn pressure(value: &Pressure) -> String {
    format!("{:.2} Pa ≈ {:.2} mmHg", value.pa, value.mmhg)
}

/// Percentage, 1 decimal
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formula and result lines for one position
///
/// Each pair is the formula with the inputs substituted, followed by the
/// evaluated result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResultLines {
    /// Position the lines describe
    pub position: Position,
    /// `F = m kg × g m/s²`
    pub force_formula: String,
    /// `F = … N`
    pub force: String,
    /// `W = F N × d m × cos θ`
    pub work_formula: String,
    /// `W = … J`
    pub work: String,
    /// `P = ρ kg/m³ × g m/s² × h m`, with the derating shown when supine
    pub pressure_formula: String,
    /// `P = … Pa ≈ … mmHg`
    pub pressure: String,
    /// `P_total = P_u mmHg + P_h mmHg`
    pub total_formula: String,
    /// `P_total = … mmHg`
    pub total: String,
}

impl ResultLines {
    /// Build the lines for one position of a report
    pub fn new(report: &ComparativeReport, position: Position) -> Self {
        let set = &report.measurements;
        let result = report.result(position);

        let pressure_formula = match position {
            Position::Vertical => format!(
                "P = {} kg/m³ × {} m/s² × {} m",
                set.fluid_density_kg_per_m3(),
                GRAVITY_M_PER_S2,
                set.fluid_height_m()
            ),
            Position::Supine => format!(
                "P = {} kg/m³ × {} m/s² × {} m × {} (reducida)",
                set.fluid_density_kg_per_m3(),
                GRAVITY_M_PER_S2,
                set.fluid_height_m(),
                position.pressure_factor()
            ),
        };

        Self {
            position,
            force_formula: format!("F = {} kg × {} m/s²", set.mass_kg(), GRAVITY_M_PER_S2),
            force: format!("F = {}", force(result.force_n)),
            work_formula: format!(
                "W = {:.2} N × {} m × {}",
                result.force_n,
                set.canal_length_m(),
                cos_deg(result.work_angle_deg)
            ),
            work: format!("W = {}", work(result.work_j)),
            pressure_formula,
            pressure: format!("P = {}", pressure(&result.hydrostatic_pressure)),
            total_formula: format!(
                "P_total = {} mmHg + {:.2} mmHg",
                set.contraction_pressure_mmhg(),
                result.hydrostatic_pressure.mmhg
            ),
            total: format!("P_total = {}", mmhg(result.total_pressure_mmhg)),
        }
    }

    /// Lines in display order
    pub fn lines(&self) -> [&str; 8] {
        [
            self.force_formula.as_str(),
            self.force.as_str(),
            self.work_formula.as_str(),
            self.work.as_str(),
            self.pressure_formula.as_str(),
            self.pressure.as_str(),
            self.total_formula.as_str(),
            self.total.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthforce_core::{compute_comparison, MeasurementSet};

    #[test]
    fn precision_per_quantity() {
        assert_eq!(force(34.300000000000004), "34.30 N");
        assert_eq!(work(5.1450000000000005), "5.1450 J");
        assert_eq!(mmhg(72.18418565578074), "72.18 mmHg");
        assert_eq!(percent(21.512925328406624), "21.5%");
    }

    #[test]
    fn vertical_lines_for_defaults() {
        let report = compute_comparison(&MeasurementSet::default());
        let lines = ResultLines::new(&report, Position::Vertical);

        assert_eq!(lines.force_formula, "F = 3.5 kg × 9.8 m/s²");
        assert_eq!(lines.force, "F = 34.30 N");
        assert_eq!(lines.work_formula, "W = 34.30 N × 0.15 m × 1");
        assert_eq!(lines.work, "W = 5.1450 J");
        assert_eq!(lines.pressure_formula, "P = 1006 kg/m³ × 9.8 m/s² × 0.3 m");
        assert_eq!(lines.pressure, "P = 2957.64 Pa ≈ 22.18 mmHg");
        assert_eq!(lines.total_formula, "P_total = 50 mmHg + 22.18 mmHg");
        assert_eq!(lines.total, "P_total = 72.18 mmHg");
    }

    #[test]
    fn supine_lines_for_defaults() {
        let report = compute_comparison(&MeasurementSet::default());
        let lines = ResultLines::new(&report, Position::Supine);

        assert_eq!(lines.work_formula, "W = 34.30 N × 0.15 m × 0");
        assert_eq!(lines.work, "W = 0.0000 J");
        assert_eq!(lines.pressure_formula, "P = 1006 kg/m³ × 9.8 m/s² × 0.3 m × 0.3 (reducida)");
        assert_eq!(lines.pressure, "P = 887.29 Pa ≈ 6.66 mmHg");
        assert_eq!(lines.total, "P_total = 56.66 mmHg");
    }
}
