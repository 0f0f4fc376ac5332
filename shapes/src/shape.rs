//! The supported shapes and their closed-form metrics.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ShapeError;
use crate::metrics::Metrics;

/// A shape the calculator knows how to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    /// Defined by its radius.
    Circle,
    /// Defined by its side.
    Square,
    /// Defined by its side.
    EquilateralTriangle,
    /// Defined by its base and its height.
    IsoscelesTriangle,
}

impl Shape {
    /// Every supported shape, in display order.
    pub const ALL: [Shape; 4] = [
        Shape::Circle,
        Shape::Square,
        Shape::EquilateralTriangle,
        Shape::IsoscelesTriangle,
    ];

    /// The tag users type to select this shape.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::EquilateralTriangle => "EquilateralTriangle",
            Shape::IsoscelesTriangle => "IsoscelesTriangle",
        }
    }

    /// Names of the primary and (if any) secondary dimension.
    #[must_use]
    pub fn dimension_labels(self) -> (&'static str, Option<&'static str>) {
        match self {
            Shape::Circle => ("radius", None),
            Shape::Square | Shape::EquilateralTriangle => ("side", None),
            Shape::IsoscelesTriangle => ("base", Some("height")),
        }
    }

    /// Returns true if the shape needs a second dimension.
    #[must_use]
    pub fn needs_secondary(self) -> bool {
        self.dimension_labels().1.is_some()
    }

    /// Area and perimeter for the given dimensions.
    ///
    /// `secondary` is only read for [`Shape::IsoscelesTriangle`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonPositive`] if a required dimension is not a
    /// finite number greater than zero, and [`ShapeError::MissingDimension`]
    /// if an isosceles triangle has no height.
    pub fn metrics(self, primary: f64, secondary: Option<f64>) -> Result<Metrics, ShapeError> {
        let p = positive(self.dimension_labels().0, primary)?;
        let metrics = match self {
            Shape::Circle => Metrics::new(PI * p * p, 2.0 * PI * p),
            Shape::Square => Metrics::new(p * p, 4.0 * p),
            Shape::EquilateralTriangle => Metrics::new(3f64.sqrt() / 4.0 * p * p, 3.0 * p),
            Shape::IsoscelesTriangle => {
                let h = secondary.ok_or(ShapeError::MissingDimension {
                    shape: self,
                    name: "height",
                })?;
                let h = positive("height", h)?;
                let leg = (h * h + (p / 2.0) * (p / 2.0)).sqrt();
                Metrics::new(0.5 * p * h, p + 2.0 * leg)
            }
        };
        Ok(metrics)
    }

    /// Parses the dimension texts as typed by the user, then computes the
    /// metrics.
    ///
    /// The secondary text is only parsed when the shape
    /// [needs one](Shape::needs_secondary); blank text counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidInput`] for an unparsable dimension,
    /// otherwise any error of [`Shape::metrics`].
    pub fn metrics_from_text(
        self,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<Metrics, ShapeError> {
        let (primary_name, secondary_name) = self.dimension_labels();
        let primary = crate::parse_dimension(primary_name, primary)?;
        let secondary = match (secondary_name, secondary.map(str::trim)) {
            (Some(name), Some(text)) if !text.is_empty() => {
                Some(crate::parse_dimension(name, text)?)
            }
            _ => None,
        };
        self.metrics(primary, secondary)
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositive { name, value })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == tag)
            .ok_or_else(|| ShapeError::UnrecognizedShape(tag.to_owned()))
    }
}
