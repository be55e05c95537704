//! Report renderers
//!
//! Every output format implements [`ReportRenderer`]: take a finished report,
//! write it to a sink. Renderers hold only presentation options; the report
//! itself is never modified.

use std::io::Write;

use birthforce_core::{ComparativeReport, Finding, Position, FINDING_COUNT};
use serde::Serialize;

use crate::{
    chart::{charts, BarChart, DEFAULT_CHART_WIDTH},
    diagram::DescentMarker,
    errors::RenderResult,
    format::ResultLines,
    prose::{conclusions, Conclusion},
};

/// Output format for a comparative report
pub trait ReportRenderer {
    /// Write `report` to `out`
    fn render(&self, report: &ComparativeReport, out: &mut dyn Write) -> RenderResult<()>;

    /// Short name used for logging and format selection
    fn name(&self) -> &'static str;
}

/// Human-readable terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    charts: bool,
    chart_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            charts: true,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl TextRenderer {
    /// Renderer without the bar chart section
    pub fn without_charts() -> Self {
        Self { charts: false, ..Self::default() }
    }

    /// Set the width of the tallest bar, in characters
    pub fn with_chart_width(mut self, width: usize) -> Self {
        self.chart_width = width.max(1);
        self
    }

    fn write_results(&self, report: &ComparativeReport, out: &mut dyn Write) -> RenderResult<()> {
        for position in Position::ALL {
            writeln!(out, "== Posición {} ==", position)?;
            for line in ResultLines::new(report, position).lines() {
                writeln!(out, "  {}", line)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_charts(&self, report: &ComparativeReport, out: &mut dyn Write) -> RenderResult<()> {
        writeln!(out, "== Gráficos ==")?;
        for chart in charts(report) {
            write!(out, "{}", chart.render_text(self.chart_width))?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_conclusions(&self, report: &ComparativeReport, out: &mut dyn Write) -> RenderResult<()> {
        writeln!(out, "== Conclusiones ==")?;
        for block in conclusions(report) {
            let marker = if block.highlight { "*" } else { "-" };
            writeln!(out, "{} {}", marker, block.title)?;
            for paragraph in &block.paragraphs {
                writeln!(out, "  {}", paragraph)?;
            }
            for item in &block.items {
                writeln!(out, "    • {}", item)?;
            }
            if let Some(closing) = block.closing {
                writeln!(out, "  {}", closing)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &ComparativeReport, out: &mut dyn Write) -> RenderResult<()> {
        self.write_results(report, out)?;
        if self.charts {
            self.write_charts(report, out)?;
        }
        self.write_conclusions(report, out)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Machine-readable JSON output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer {
    /// Indent the document
    pub pretty: bool,
}

/// Everything a front end needs to draw a report
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    /// Raw numbers
    pub report: &'a ComparativeReport,
    /// Findings in presentation order
    pub findings: [Finding; FINDING_COUNT],
    /// Formula and result lines per position
    pub lines: [ResultLines; 2],
    /// Chart series
    pub charts: [BarChart; 3],
    /// Diagram marker layout
    pub diagram: DescentMarker,
    /// Narrative conclusions
    pub conclusions: Vec<Conclusion>,
}

impl<'a> ReportDocument<'a> {
    /// Assemble the document for a report
    pub fn new(report: &'a ComparativeReport) -> Self {
        Self {
            report,
            findings: report.findings(),
            lines: Position::ALL.map(|position| ResultLines::new(report, position)),
            charts: charts(report),
            diagram: DescentMarker::for_canal_length(report.measurements.canal_length_m()),
            conclusions: conclusions(report),
        }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &ComparativeReport, out: &mut dyn Write) -> RenderResult<()> {
        let document = ReportDocument::new(report);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &document)?;
        } else {
            serde_json::to_writer(&mut *out, &document)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
