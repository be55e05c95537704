//! Presentation of Birthforce Comparative Reports
//!
//! ## Overview
//!
//! The core crate produces numbers; this crate decides how they look. It is
//! the single rendering layer for every front end:
//!
//! - [`format`]: display precision and the expanded formula lines
//! - [`chart`]: bar-chart series for the three compared metrics
//! - [`diagram`]: marker placement for the descent diagram
//! - [`prose`]: narrative conclusions built from the findings
//! - [`renderer`]: the [`ReportRenderer`] trait with text and JSON outputs
//!
//! ## Usage
//!
//! ```rust
//! use birthforce_core::{compute_comparison, MeasurementSet};
//! use birthforce_render::{ReportRenderer, TextRenderer};
//!
//! let report = compute_comparison(&MeasurementSet::default());
//! let mut out = Vec::new();
//! TextRenderer::default().render(&report, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("Conclusión General"));
//! # Ok::<(), birthforce_render::RenderError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod chart;
pub mod diagram;
pub mod errors;
pub mod format;
pub mod prose;
pub mod renderer;

pub use chart::{BarChart, Bar};
pub use diagram::DescentMarker;
pub use errors::{RenderError, RenderResult};
pub use format::ResultLines;
pub use prose::Conclusion;
pub use renderer::{JsonRenderer, ReportDocument, ReportRenderer, TextRenderer};

/// Select a renderer by its [`ReportRenderer::name`]
pub fn renderer_for(name: &str, charts: bool) -> Option<Box<dyn ReportRenderer>> {
    log::debug!("selecting renderer {:?} (charts: {})", name, charts);
    match name {
        "text" if charts => Some(Box::new(TextRenderer::default())),
        "text" => Some(Box::new(TextRenderer::without_charts())),
        "json" => Some(Box::new(JsonRenderer { pretty: true })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_renderers() {
        assert_eq!(renderer_for("text", true).map(|r| r.name()), Some("text"));
        assert_eq!(renderer_for("json", false).map(|r| r.name()), Some("json"));
        assert!(renderer_for("html", true).is_none());
    }
}
