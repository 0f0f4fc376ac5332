use std::fmt;

use serde::Serialize;

/// Area and perimeter of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Area in square units.
    pub area: f64,
    /// Perimeter (circumference for circles) in units.
    pub perimeter: f64,
}

impl Metrics {
    /// Both values zero; the result of the lenient calculator on bad input.
    pub const ZERO: Metrics = Metrics {
        area: 0.0,
        perimeter: 0.0,
    };

    /// Creates metrics from an area and a perimeter.
    #[must_use]
    pub fn new(area: f64, perimeter: f64) -> Self {
        Self { area, perimeter }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Area: {:.2} sq. units, Perimeter: {:.2} units",
            self.area, self.perimeter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_two_decimals() {
        let m = Metrics::new(12.566_370_614, 12.566_370_614);
        assert_eq!(
            m.to_string(),
            "Area: 12.57 sq. units, Perimeter: 12.57 units"
        );
        assert_eq!(
            Metrics::ZERO.to_string(),
            "Area: 0.00 sq. units, Perimeter: 0.00 units"
        );
    }
}
