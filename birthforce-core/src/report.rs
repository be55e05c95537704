//! Per-Position Results and the Comparative Report
//!
//! A [`ComputationResult`] holds everything computed for one position. A
//! [`ComparativeReport`] pairs the vertical and supine results with the
//! measurements they came from and the derived comparisons.
//!
//! Both are plain immutable values. Building one performs the arithmetic;
//! nothing is cached between reports.

use crate::{
    analysis::{Finding, GeneralConclusion, Metric, MetricComparison, FINDING_COUNT},
    formulas,
    measurements::MeasurementSet,
    position::Position,
};

/// A pressure expressed in both reporting units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    /// Pascals
    pub pa: f64,
    /// Millimetres of mercury
    pub mmhg: f64,
}

impl Pressure {
    /// Build from pascals, deriving mmHg
    pub fn from_pa(pa: f64) -> Self {
        Self { pa, mmhg: formulas::pa_to_mmhg(pa) }
    }
}

/// Forces, work and pressures for one maternal position
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputationResult {
    /// Position these values apply to
    pub position: Position,
    /// Angle between weight and descent used for the work term (degrees)
    pub work_angle_deg: f64,
    /// Weight of the infant (N), the same in both positions
    pub force_n: f64,
    /// Useful work over the canal length (J)
    pub work_j: f64,
    /// Hydrostatic pressure of the fluid column in this position
    pub hydrostatic_pressure: Pressure,
    /// Contraction pressure plus hydrostatic pressure (mmHg)
    pub total_pressure_mmhg: f64,
}

impl ComputationResult {
    /// Evaluate the model for one position
    pub fn compute(position: Position, measurements: &MeasurementSet) -> Self {
        let work_angle_deg = position.work_angle_deg();
        let force_n = formulas::gravitational_force(measurements.mass_kg());
        let work_j = formulas::mechanical_work(force_n, measurements.canal_length_m(), work_angle_deg);

        let full_column_pa = formulas::hydrostatic_pressure(
            measurements.fluid_density_kg_per_m3(),
            measurements.fluid_height_m(),
        );
        let hydrostatic_pressure = Pressure::from_pa(position.effective_pressure_pa(full_column_pa));

        let total_pressure_mmhg = formulas::total_pressure(
            measurements.contraction_pressure_mmhg(),
            hydrostatic_pressure.mmhg,
        );

        Self {
            position,
            work_angle_deg,
            force_n,
            work_j,
            hydrostatic_pressure,
            total_pressure_mmhg,
        }
    }

    /// Value of a compared metric in this position
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Work => self.work_j,
            Metric::HydrostaticPressure => self.hydrostatic_pressure.mmhg,
            Metric::TotalPressure => self.total_pressure_mmhg,
        }
    }
}

/// Vertical vs. supine comparison of every metric
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Useful work (J)
    pub work: MetricComparison,
    /// Hydrostatic pressure (mmHg)
    pub hydrostatic_pressure: MetricComparison,
    /// Total effective pressure (mmHg)
    pub total_pressure: MetricComparison,
}

impl Comparison {
    /// Compare two results metric by metric
    pub fn between(vertical: &ComputationResult, supine: &ComputationResult) -> Self {
        let compare = |metric| MetricComparison::new(metric, vertical.metric(metric), supine.metric(metric));
        Self {
            work: compare(Metric::Work),
            hydrostatic_pressure: compare(Metric::HydrostaticPressure),
            total_pressure: compare(Metric::TotalPressure),
        }
    }

    /// Comparison for a single metric
    pub fn get(&self, metric: Metric) -> &MetricComparison {
        match metric {
            Metric::Work => &self.work,
            Metric::HydrostaticPressure => &self.hydrostatic_pressure,
            Metric::TotalPressure => &self.total_pressure,
        }
    }
}

/// Full outcome of one computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparativeReport {
    /// Inputs the report was computed from
    pub measurements: MeasurementSet,
    /// Upright results
    pub vertical: ComputationResult,
    /// Lying-down results
    pub supine: ComputationResult,
    /// Metric-by-metric comparison
    pub comparison: Comparison,
}

impl ComparativeReport {
    /// Compute both positions and compare them
    pub fn compute(measurements: &MeasurementSet) -> Self {
        let vertical = ComputationResult::compute(Position::Vertical, measurements);
        let supine = ComputationResult::compute(Position::Supine, measurements);
        Self {
            measurements: *measurements,
            vertical,
            supine,
            comparison: Comparison::between(&vertical, &supine),
        }
    }

    /// Result for one position
    pub fn result(&self, position: Position) -> &ComputationResult {
        match position {
            Position::Vertical => &self.vertical,
            Position::Supine => &self.supine,
        }
    }

    /// Findings in presentation order: work, hydrostatic pressure, total pressure, general
    pub fn findings(&self) -> [Finding; FINDING_COUNT] {
        [
            Finding::Comparison(self.comparison.work),
            Finding::Comparison(self.comparison.hydrostatic_pressure),
            Finding::Comparison(self.comparison.total_pressure),
            Finding::General(GeneralConclusion::VERTICAL),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn force_is_position_independent() {
        let set = MeasurementSet::default();
        let vertical = ComputationResult::compute(Position::Vertical, &set);
        let supine = ComputationResult::compute(Position::Supine, &set);
        assert_eq!(vertical.force_n, supine.force_n);
    }

    #[test]
    fn supine_pressure_is_thirty_percent_in_pascals() {
        let set = MeasurementSet::new(3.0, 0.2, 0.27, 1010.0, 40.0).unwrap();
        let report = ComparativeReport::compute(&set);
        assert_eq!(
            report.supine.hydrostatic_pressure.pa,
            0.3 * report.vertical.hydrostatic_pressure.pa
        );
    }

    #[test]
    fn total_adds_contraction_pressure() {
        let report = ComparativeReport::compute(&MeasurementSet::default());
        for position in Position::ALL {
            let result = report.result(position);
            assert_relative_eq!(
                result.total_pressure_mmhg - result.hydrostatic_pressure.mmhg,
                50.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn findings_order() {
        let report = ComparativeReport::compute(&MeasurementSet::default());
        let findings = report.findings();
        let metrics: [Option<Metric>; 4] = [
            findings[0].as_comparison().map(|c| c.metric),
            findings[1].as_comparison().map(|c| c.metric),
            findings[2].as_comparison().map(|c| c.metric),
            findings[3].as_comparison().map(|c| c.metric),
        ];
        assert_eq!(
            metrics,
            [Some(Metric::Work), Some(Metric::HydrostaticPressure), Some(Metric::TotalPressure), None]
        );
        assert_eq!(findings[3], Finding::General(GeneralConclusion::VERTICAL));
    }

    #[test]
    fn comparison_lookup_by_metric() {
        let report = ComparativeReport::compute(&MeasurementSet::default());
        for metric in Metric::ALL {
            let cmp = report.comparison.get(metric);
            assert_eq!(cmp.metric, metric);
            assert_eq!(cmp.vertical, report.vertical.metric(metric));
            assert_eq!(cmp.supine, report.supine.metric(metric));
        }
    }
}
