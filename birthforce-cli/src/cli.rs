//! Command-line arguments and the compute-and-render run
//!
//! Measurements are taken as raw text and handed to the engine unparsed, so
//! the command line reports exactly the same validation errors as any other
//! front end.

use std::io::Write;

use anyhow::{anyhow, Context};
use birthforce_core::{compute_comparison_from_text, RawMeasurements};
use birthforce_render::renderer_for;
use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};

/// Compare labour biomechanics in the vertical and supine positions
#[derive(Parser, Debug)]
#[command(name = "birthforce")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Infant mass (kg)
    #[arg(long, default_value = "3.5", allow_hyphen_values = true)]
    pub mass: String,

    /// Birth canal length (m)
    #[arg(long, default_value = "0.15", allow_hyphen_values = true)]
    pub canal_length: String,

    /// Amniotic fluid column height (m)
    #[arg(long, default_value = "0.30", allow_hyphen_values = true)]
    pub fluid_height: String,

    /// Amniotic fluid density (kg/m³)
    #[arg(long, default_value = "1006", allow_hyphen_values = true)]
    pub fluid_density: String,

    /// Uterine contraction pressure (mmHg)
    #[arg(long, default_value = "50", allow_hyphen_values = true)]
    pub contraction_pressure: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit the bar charts from text output
    #[arg(long)]
    pub no_charts: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

/// Supported output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formulas, charts and conclusions for a terminal
    Text,
    /// The full report document as JSON
    Json,
}

impl OutputFormat {
    fn renderer_name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl Cli {
    /// Raw measurement text as given on the command line
    pub fn raw_measurements(&self) -> RawMeasurements<'_> {
        RawMeasurements {
            mass: &self.mass,
            canal_length: &self.canal_length,
            fluid_height: &self.fluid_height,
            fluid_density: &self.fluid_density,
            contraction_pressure: &self.contraction_pressure,
        }
    }

    /// Tracing level for `--log-level`, falling back to warnings
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

/// Compute the report and write it to `out`
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let raw = cli.raw_measurements();
    debug!(?raw, "computing comparison");

    let report = compute_comparison_from_text(&raw).context("invalid measurements")?;

    let renderer = renderer_for(cli.format.renderer_name(), !cli.no_charts)
        .ok_or_else(|| anyhow!("no renderer for {:?}", cli.format))?;
    info!(renderer = renderer.name(), "rendering report");

    renderer.render(&report, out).context("failed to render report")?;
    Ok(())
}
