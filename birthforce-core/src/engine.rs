//! Physics Engine Entry Points
//!
//! The engine is stateless: both functions are pure and repeated calls with
//! the same input produce bit-identical reports.
//!
//! ```rust
//! use birthforce_core::{compute_comparison, MeasurementSet, Position};
//!
//! let report = compute_comparison(&MeasurementSet::default());
//! assert_eq!(report.comparison.work.winner, Position::Vertical);
//! assert_eq!(report.supine.work_j, 0.0);
//! ```

use crate::{
    errors::ValidationResult,
    measurements::{MeasurementSet, RawMeasurements},
    report::ComparativeReport,
};

/// Compute both positions for a validated measurement set
pub fn compute_comparison(measurements: &MeasurementSet) -> ComparativeReport {
    let report = ComparativeReport::compute(measurements);

    log_debug!(
        "computed report: F={} N, W={}/{} J, P_total={}/{} mmHg",
        report.vertical.force_n,
        report.vertical.work_j,
        report.supine.work_j,
        report.vertical.total_pressure_mmhg,
        report.supine.total_pressure_mmhg
    );

    report
}

/// Parse, validate and compute in one step
///
/// Fails with the first invalid field; no partial report is produced.
pub fn compute_comparison_from_text(raw: &RawMeasurements<'_>) -> ValidationResult<ComparativeReport> {
    let measurements = MeasurementSet::parse(raw)?;
    Ok(compute_comparison(&measurements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ValidationError, measurements::Field};

    #[test]
    fn text_entry_matches_numeric_entry() {
        let raw = RawMeasurements {
            mass: "3.5",
            canal_length: "0.15",
            fluid_height: "0.30",
            fluid_density: "1006",
            contraction_pressure: "50",
        };
        let from_text = compute_comparison_from_text(&raw).unwrap();
        assert_eq!(from_text, compute_comparison(&MeasurementSet::default()));
    }

    #[test]
    fn text_entry_reports_invalid_field() {
        let raw = RawMeasurements {
            mass: "3.5",
            canal_length: "0.15",
            fluid_height: "0.30",
            fluid_density: "0",
            contraction_pressure: "50",
        };
        assert_eq!(
            compute_comparison_from_text(&raw),
            Err(ValidationError::NotPositive { field: Field::FluidDensity, value: 0.0 })
        );
    }
}
