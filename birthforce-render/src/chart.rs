//! Bar charts of the compared metrics
//!
//! One chart per compared metric, each with a vertical and a supine bar.
//! The value axis always starts at zero and every bar carries a 2-decimal
//! data label. [`BarChart::render_text`] draws a chart with block characters
//! for terminals; other front ends can read the series directly.
//!
//! ```text
//! Trabajo Mecánico (J)
//!   Posición Vertical │████████████████████████████████████████ 5.15
//!   Posición Supina   │ 0.00
//! ```

use birthforce_core::{ComparativeReport, Metric, Position};
use serde::Serialize;

/// Character used to draw bar segments
const BAR_GLYPH: char = '█';

/// Default bar length for the largest value, in characters
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// A single bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Position the bar represents
    pub position: Position,
    /// Axis label
    pub label: &'static str,
    /// Bar height in the chart's unit
    pub value: f64,
}

/// Two-bar comparison chart for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarChart {
    /// Metric charted
    pub metric: Metric,
    /// Dataset title including unit
    pub title: &'static str,
    /// Vertical bar first, then supine
    pub bars: [Bar; 2],
}

impl BarChart {
    /// Chart one metric of a report
    pub fn for_metric(report: &ComparativeReport, metric: Metric) -> Self {
        let comparison = report.comparison.get(metric);
        let bar = |position| Bar {
            position,
            label: position_label(position),
            value: comparison.value(position),
        };

        Self {
            metric,
            title: title(metric),
            bars: [bar(Position::Vertical), bar(Position::Supine)],
        }
    }

    /// Largest bar value, never below zero
    pub fn axis_max(&self) -> f64 {
        self.bars.iter().fold(0.0, |max, bar| bar.value.max(max))
    }

    /// Draw the chart as text, `width` characters for the tallest bar
    pub fn render_text(&self, width: usize) -> String {
        let axis_max = self.axis_max();
        let label_width = self.bars.iter().map(|bar| bar.label.chars().count()).max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(self.title);
        out.push('\n');

        for bar in &self.bars {
            let length = bar_length(bar.value, axis_max, width);
            out.push_str(&format!(
                "  {:<label_width$} │{} {:.2}\n",
                bar.label,
                BAR_GLYPH.to_string().repeat(length),
                bar.value,
            ));
        }

        out
    }
}

/// The three charts of a report, in finding order
pub fn charts(report: &ComparativeReport) -> [BarChart; 3] {
    Metric::ALL.map(|metric| BarChart::for_metric(report, metric))
}

/// Axis label of a position
pub fn position_label(position: Position) -> &'static str {
    match position {
        Position::Vertical => "Posición Vertical",
        Position::Supine => "Posición Supina",
    }
}

fn title(metric: Metric) -> &'static str {
    match metric {
        Metric::Work => "Trabajo Mecánico (J)",
        Metric::HydrostaticPressure => "Presión Hidrostática (mmHg)",
        Metric::TotalPressure => "Presión Total Efectiva (mmHg)",
    }
}

fn bar_length(value: f64, axis_max: f64, width: usize) -> usize {
    if axis_max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / axis_max) * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthforce_core::{compute_comparison, MeasurementSet};

    #[test]
    fn charts_follow_metric_order() {
        let report = compute_comparison(&MeasurementSet::default());
        let [work, hydrostatic, total] = charts(&report);

        assert_eq!(work.metric, Metric::Work);
        assert_eq!(hydrostatic.metric, Metric::HydrostaticPressure);
        assert_eq!(total.metric, Metric::TotalPressure);
        assert_eq!(work.bars[0].label, "Posición Vertical");
        assert_eq!(work.bars[1].label, "Posición Supina");
        assert_eq!(work.bars[1].value, 0.0);
    }

    #[test]
    fn tallest_bar_spans_width() {
        let report = compute_comparison(&MeasurementSet::default());
        let chart = BarChart::for_metric(&report, Metric::HydrostaticPressure);
        let text = chart.render_text(20);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Presión Hidrostática (mmHg)");
        assert_eq!(lines[1].matches(BAR_GLYPH).count(), 20);
        assert_eq!(lines[2].matches(BAR_GLYPH).count(), 6);
        assert!(lines[1].ends_with(" 22.18"));
        assert!(lines[2].ends_with(" 6.66"));
    }

    #[test]
    fn zero_bars_are_empty() {
        assert_eq!(bar_length(0.0, 5.0, 40), 0);
        assert_eq!(bar_length(0.0, 0.0, 40), 0);
        assert_eq!(bar_length(5.0, 5.0, 40), 40);
    }
}
