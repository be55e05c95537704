//! Comparative Analysis
//!
//! Turns the pair of per-position results into findings a presentation layer
//! can phrase. Each compared metric yields a winner and a percentage
//! difference:
//!
//! ```text
//! winner      = Vertical if vertical > supine, otherwise Supine
//! difference  = (vertical - supine) / vertical × 100    (0.0 if vertical == 0)
//! ```
//!
//! The comparison is strict, so a tie goes to the supine position.
//!
//! The fourth finding, the general conclusion, is fixed content: it always
//! favours the vertical position and lists the same three advantages no
//! matter how the per-metric comparisons came out.

use core::fmt;

use crate::position::Position;

/// Number of findings produced for every report
pub const FINDING_COUNT: usize = 4;

/// Quantity compared between positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Useful mechanical work (J)
    Work,
    /// Hydrostatic pressure of the fluid column (mmHg)
    HydrostaticPressure,
    /// Contraction plus hydrostatic pressure (mmHg)
    TotalPressure,
}

impl Metric {
    /// Compared metrics, in finding order
    pub const ALL: [Metric; 3] = [Metric::Work, Metric::HydrostaticPressure, Metric::TotalPressure];

    /// Unit the compared values are expressed in
    pub const fn unit(self) -> &'static str {
        match self {
            Metric::Work => "J",
            Metric::HydrostaticPressure | Metric::TotalPressure => "mmHg",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Metric::Work => "work",
            Metric::HydrostaticPressure => "hydrostatic pressure",
            Metric::TotalPressure => "total pressure",
        })
    }
}

/// One metric compared across both positions
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricComparison {
    /// What is being compared
    pub metric: Metric,
    /// Value in the vertical position
    pub vertical: f64,
    /// Value in the supine position
    pub supine: f64,
    /// Position with the strictly greater value (ties go to supine)
    pub winner: Position,
    /// `(vertical - supine) / vertical × 100`, or 0.0 when vertical is zero
    pub percent_difference: f64,
}

impl MetricComparison {
    /// Compare a metric's vertical and supine values
    pub fn new(metric: Metric, vertical: f64, supine: f64) -> Self {
        Self {
            metric,
            vertical,
            supine,
            winner: winner(vertical, supine),
            percent_difference: percentage_difference(vertical, supine),
        }
    }

    /// Value for a given position
    pub fn value(&self, position: Position) -> f64 {
        match position {
            Position::Vertical => self.vertical,
            Position::Supine => self.supine,
        }
    }
}

/// Position with the strictly greater value; equal values favour supine
pub fn winner(vertical: f64, supine: f64) -> Position {
    if vertical > supine {
        Position::Vertical
    } else {
        Position::Supine
    }
}

/// Relative advantage of vertical over supine, in percent of the vertical value
///
/// Returns 0.0 when vertical is zero, and when the values are so large that
/// the result is not finite.
pub fn percentage_difference(vertical: f64, supine: f64) -> f64 {
    if vertical == 0.0 {
        return 0.0;
    }
    let diff = (vertical - supine) / vertical * 100.0;
    if diff.is_finite() {
        diff
    } else {
        0.0
    }
}

/// Fixed closing statement of every analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralConclusion {
    /// Position the conclusion recommends
    pub favored: Position,
    /// Metrics cited as advantages of the favoured position
    pub advantages: [Metric; 3],
}

impl GeneralConclusion {
    /// The conclusion every report ends with
    pub const VERTICAL: GeneralConclusion = GeneralConclusion {
        favored: Position::Vertical,
        advantages: Metric::ALL,
    };
}

/// A single statement derived from a report
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Finding {
    /// Outcome of comparing one metric
    Comparison(MetricComparison),
    /// The fixed general conclusion
    General(GeneralConclusion),
}

impl Finding {
    /// The metric comparison, if this finding is one
    pub fn as_comparison(&self) -> Option<&MetricComparison> {
        match self {
            Finding::Comparison(comparison) => Some(comparison),
            Finding::General(_) => None,
        }
    }
}
