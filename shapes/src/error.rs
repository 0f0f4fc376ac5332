use crate::shape::Shape;

/// Why a calculation could not be performed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The shape tag is not one of [`Shape::ALL`].
    #[error("unrecognized shape '{0}' (expected Circle, Square, EquilateralTriangle or IsoscelesTriangle)")]
    UnrecognizedShape(String),

    /// Dimension text is not a number.
    #[error("invalid input for {name}: '{text}' is not a number")]
    InvalidInput {
        /// Dimension being parsed.
        name: &'static str,
        /// Text as entered.
        text: String,
    },

    /// A dimension is zero, negative, or not finite.
    #[error("{name} must be a positive number, got {value}")]
    NonPositive {
        /// Dimension that was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A shape's second dimension was not supplied.
    #[error("{shape} requires a {name}")]
    MissingDimension {
        /// Shape being measured.
        shape: Shape,
        /// Dimension that is missing.
        name: &'static str,
    },
}
