//! Area and perimeter of four basic shapes.
//!
//! | Shape | Dimensions | Area | Perimeter |
//! |-------|------------|------|-----------|
//! | `Circle` | radius r | π·r² | 2·π·r |
//! | `Square` | side s | s² | 4·s |
//! | `EquilateralTriangle` | side s | (√3/4)·s² | 3·s |
//! | `IsoscelesTriangle` | base b, height h | b·h/2 | b + 2·√(h² + (b/2)²) |
//!
//! # Entry Point
//!
//! ```
//! let m = geo_shapes::calculate("Square", 3.0, None).expect("valid square");
//! assert_eq!((m.area, m.perimeter), (9.0, 12.0));
//!
//! // The lenient entry point maps every failure to zero.
//! let zero = geo_shapes::calculate_or_zero("Hexagon", 5.0, None);
//! assert_eq!(zero, geo_shapes::Metrics::ZERO);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod error;
mod metrics;
mod shape;

pub use error::ShapeError;
pub use metrics::Metrics;
pub use shape::Shape;

/// Calculates the metrics of the shape named by `tag`.
///
/// # Errors
///
/// Returns [`ShapeError::UnrecognizedShape`] for an unknown tag, otherwise
/// any error of [`Shape::metrics`].
pub fn calculate(tag: &str, primary: f64, secondary: Option<f64>) -> Result<Metrics, ShapeError> {
    tag.parse::<Shape>()?.metrics(primary, secondary)
}

/// Like [`calculate`], but every failure yields [`Metrics::ZERO`].
#[must_use]
pub fn calculate_or_zero(tag: &str, primary: f64, secondary: Option<f64>) -> Metrics {
    calculate(tag, primary, secondary).unwrap_or_else(|err| {
        tracing::debug!(tag, error = %err, "falling back to zero metrics");
        Metrics::ZERO
    })
}

/// Parses a dimension as typed by the user.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidInput`] if the trimmed text is not a number.
pub fn parse_dimension(name: &'static str, text: &str) -> Result<f64, ShapeError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ShapeError::InvalidInput {
            name,
            text: text.to_owned(),
        })
}

/// The "calculate" action: parses the shape tag, then hands the dimension
/// texts to [`Shape::metrics_from_text`].
///
/// # Errors
///
/// Returns the first [`ShapeError`] encountered: unknown tag, unparsable
/// dimension, or a dimension rejected by [`Shape::metrics`].
pub fn calculate_from_text(
    tag: &str,
    primary: &str,
    secondary: Option<&str>,
) -> Result<Metrics, ShapeError> {
    tag.parse::<Shape>()?.metrics_from_text(primary, secondary)
}
