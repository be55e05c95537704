//! Default Comparison Example
//!
//! This example demonstrates the simplest use of Birthforce: computing the
//! vertical vs. supine comparison for the default measurements and reading
//! the findings.
//!
//! ## What You'll Learn
//!
//! - Building a validated measurement set
//! - Computing a comparative report
//! - Reading per-position results and findings
//! - Handling validation errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_default_comparison
//! ```

use birthforce_core::{
    compute_comparison, Field, Finding, MeasurementSet, Position, ValidationError,
};

fn main() {
    println!("Birthforce Default Comparison Example");
    println!("=====================================\n");

    let measurements = MeasurementSet::default();

    println!("Measurements:");
    for field in Field::ALL {
        println!("  {:<22} {} {}", field.name(), measurements.value(field), field.unit());
    }
    println!();

    let report = compute_comparison(&measurements);

    for position in Position::ALL {
        let result = report.result(position);
        println!("Position {}:", position);
        println!("  Force:         {:.2} N", result.force_n);
        println!("  Work:          {:.4} J", result.work_j);
        println!(
            "  Hydrostatic:   {:.2} Pa ≈ {:.2} mmHg",
            result.hydrostatic_pressure.pa, result.hydrostatic_pressure.mmhg
        );
        println!("  Total:         {:.2} mmHg", result.total_pressure_mmhg);
        println!();
    }

    println!("Findings:");
    for finding in report.findings() {
        match finding {
            Finding::Comparison(cmp) => println!(
                "  {:<22} winner: {:<9} difference: {:.1}%",
                cmp.metric, cmp.winner, cmp.percent_difference
            ),
            Finding::General(conclusion) => {
                println!("  general conclusion     favours: {}", conclusion.favored)
            }
        }
    }

    println!("\nTesting invalid measurements:\n");

    let test_cases = [
        (0.0, "Zero mass"),
        (-1.0, "Negative mass"),
        (f64::NAN, "Invalid value (NaN)"),
    ];

    for (mass, description) in &test_cases {
        print!("{:.<40} ", description);
        match MeasurementSet::new(*mass, 0.15, 0.30, 1006.0, 50.0) {
            Ok(_) => println!("✓ VALID"),
            Err(e) => println!("✗ INVALID: {}", format_error(&e)),
        }
    }
}

fn format_error(error: &ValidationError) -> String {
    match error {
        ValidationError::NotPositive { field, value } => {
            format!("{} must be greater than zero (got {})", field.form_key(), value)
        }
        ValidationError::NonFinite { field } => format!("{} is not a finite number", field.form_key()),
        ValidationError::NotANumber { field } => format!("{} is not a number", field.form_key()),
    }
}
