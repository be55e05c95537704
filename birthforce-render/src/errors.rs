//! Rendering errors
//!
//! The core never fails after validation, so everything here comes from the
//! output side: the sink refusing bytes or the serializer giving up.

use thiserror::Error;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Failures while writing a report
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing to the output sink failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the report as JSON failed
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
