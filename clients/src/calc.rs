//! The shape calculator shared by `geo-viewer calc` and the browse session.

use anyhow::Result;
use geo_shapes::{Metrics, Shape, ShapeError};

use crate::render::{self, OutputMode};

/// Whether a failed calculation is an error or zero metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Failure {
    /// Report the error.
    #[default]
    Strict,
    /// Log the error and render [`Metrics::ZERO`].
    Lenient,
}

/// Parses the shape tag and dimension texts, computes the metrics and renders
/// them in `mode`.
///
/// # Errors
///
/// Under [`Failure::Strict`], returns the calculation error. Under either
/// policy, returns an error if JSON serialization fails.
pub fn run(
    mode: OutputMode,
    tag: &str,
    primary: &str,
    secondary: Option<&str>,
    on_failure: Failure,
) -> Result<String> {
    match measure(tag, primary, secondary) {
        Ok((shape, metrics)) => render::calculation(mode, shape, metrics),
        Err(err) if on_failure == Failure::Lenient => {
            tracing::warn!(error = %err, "calculation failed; printing zero metrics");
            render::metrics(mode, Metrics::ZERO)
        }
        Err(err) => Err(err.into()),
    }
}

fn measure(
    tag: &str,
    primary: &str,
    secondary: Option<&str>,
) -> Result<(Shape, Metrics), ShapeError> {
    let shape: Shape = tag.parse()?;
    if secondary.is_some() && !shape.needs_secondary() {
        tracing::debug!(%shape, "ignoring second dimension");
    }
    let metrics = shape.metrics_from_text(primary, secondary)?;
    Ok((shape, metrics))
}
