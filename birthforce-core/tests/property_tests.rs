//! Property-based tests for the physics engine using proptest.
//!
//! Covers: quarter-turn work angles, supine pressure derating, winner and
//! percentage rules, idempotence over the whole valid input domain.

use birthforce_core::{
    analysis::{percentage_difference, winner},
    compute_comparison,
    formulas::{mechanical_work, pa_to_mmhg, mmhg_to_pa},
    MeasurementSet, Position,
};
use proptest::prelude::*;

fn valid_measurements() -> impl Strategy<Value = MeasurementSet> {
    (0.5f64..6.0, 0.05f64..0.3, 0.05f64..0.5, 990.0f64..1030.0, 5.0f64..120.0).prop_map(
        |(mass, canal, height, density, contraction)| {
            MeasurementSet::new(mass, canal, height, density, contraction)
                .expect("strategy only yields positive finite values")
        },
    )
}

// ── Formula Primitives ───────────────────────────────────────────────

proptest! {
    /// A right angle between force and path never produces work.
    #[test]
    fn right_angle_work_is_zero(force in 0.0f64..1.0e6, distance in 0.0f64..1.0e3) {
        prop_assert_eq!(mechanical_work(force, distance, 90.0), 0.0);
    }

    /// Aligned force and path produce exactly F·d.
    #[test]
    fn aligned_work_is_force_times_distance(force in 0.0f64..1.0e6, distance in 0.0f64..1.0e3) {
        prop_assert_eq!(mechanical_work(force, distance, 0.0), force * distance);
    }

    /// Converting to mmHg and back recovers pascals.
    #[test]
    fn mmhg_conversion_inverts(pa in 1.0e-3f64..1.0e6) {
        let back = mmhg_to_pa(pa_to_mmhg(pa));
        prop_assert!((back - pa).abs() <= pa * 1e-12);
    }
}

// ── Comparison Rules ─────────────────────────────────────────────────

proptest! {
    /// Vertical only wins when strictly greater.
    #[test]
    fn winner_is_strict(vertical in -1.0e3f64..1.0e3, supine in -1.0e3f64..1.0e3) {
        let expected = if vertical > supine { Position::Vertical } else { Position::Supine };
        prop_assert_eq!(winner(vertical, supine), expected);
        prop_assert_eq!(winner(vertical, vertical), Position::Supine);
    }

    /// Percentage difference is always finite.
    #[test]
    fn percentage_is_finite(vertical in -1.0e3f64..1.0e3, supine in -1.0e3f64..1.0e3) {
        prop_assume!(vertical.abs() > 1e-6 || vertical == 0.0);
        prop_assert!(percentage_difference(vertical, supine).is_finite());
        prop_assert_eq!(percentage_difference(0.0, supine), 0.0);
    }
}

// ── Whole Reports ────────────────────────────────────────────────────

proptest! {
    /// Supine hydrostatic pressure is 30% of vertical, in pascals.
    #[test]
    fn supine_pressure_is_derated(set in valid_measurements()) {
        let report = compute_comparison(&set);
        prop_assert_eq!(
            report.supine.hydrostatic_pressure.pa,
            0.3 * report.vertical.hydrostatic_pressure.pa
        );
    }

    /// With valid inputs vertical wins every metric.
    #[test]
    fn vertical_wins_every_metric(set in valid_measurements()) {
        let report = compute_comparison(&set);
        prop_assert_eq!(report.comparison.work.winner, Position::Vertical);
        prop_assert_eq!(report.comparison.hydrostatic_pressure.winner, Position::Vertical);
        prop_assert_eq!(report.comparison.total_pressure.winner, Position::Vertical);
        prop_assert_eq!(report.supine.work_j, 0.0);
    }

    /// The same input always yields the same report.
    #[test]
    fn computation_is_idempotent(set in valid_measurements()) {
        prop_assert_eq!(compute_comparison(&set), compute_comparison(&set));
    }

    /// Force does not depend on position.
    #[test]
    fn force_is_shared(set in valid_measurements()) {
        let report = compute_comparison(&set);
        prop_assert_eq!(report.vertical.force_n, report.supine.force_n);
    }
}
