//! Descent diagram layout
//!
//! Places the infant marker on the two side-by-side position diagrams. The
//! marker starts 80 px in and travels further the longer the canal, clamped
//! at 320 px so it never leaves the drawing:
//!
//! ```text
//! vertical  cy = min(80 + d / 0.15 × 200, 320)
//! supine    cx = min(80 + d / 0.15 × 220, 320)
//! ```
//!
//! The layout tracks the canal length as it is being edited, so it takes a
//! bare number rather than a validated measurement set.

use serde::Serialize;

/// Marker start offset (px)
const MARKER_START_PX: f64 = 80.0;
/// Canal length that maps to a full travel (m)
const REFERENCE_CANAL_M: f64 = 0.15;
/// Travel for the reference canal in the vertical diagram (px)
const VERTICAL_TRAVEL_PX: f64 = 200.0;
/// Travel for the reference canal in the supine diagram (px)
const SUPINE_TRAVEL_PX: f64 = 220.0;
/// Furthest the marker may go (px)
const MARKER_LIMIT_PX: f64 = 320.0;

/// Marker coordinates for both diagrams
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescentMarker {
    /// Vertical diagram: marker centre y (px), descending
    pub vertical_cy: f64,
    /// Supine diagram: marker centre x (px), advancing
    pub supine_cx: f64,
}

impl DescentMarker {
    /// Lay out the markers for a canal length in metres
    pub fn for_canal_length(canal_length_m: f64) -> Self {
        let progress = canal_length_m / REFERENCE_CANAL_M;
        Self {
            vertical_cy: (MARKER_START_PX + progress * VERTICAL_TRAVEL_PX).min(MARKER_LIMIT_PX),
            supine_cx: (MARKER_START_PX + progress * SUPINE_TRAVEL_PX).min(MARKER_LIMIT_PX),
        }
    }
}
