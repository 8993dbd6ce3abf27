use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;
use crate::geometry::primitives::{Point, Rect};

/// Dimensions of the repeating rectangular detail, in centimeters. Details are never rotated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RectSpec {
    pub width: f64,
    pub height: f64,
}

impl RectSpec {
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::InvalidDimensions(format!(
                    "detail {name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(Self { width, height })
    }

    /// Axis-aligned footprint of the detail when centered at `center`
    pub fn footprint(&self, center: Point) -> Rect {
        Rect::from_center(center, self.width, self.height)
    }

    /// Corners of the detail when centered at `center`
    pub fn corners(&self, center: Point) -> [Point; 4] {
        self.footprint(center).corners()
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
