use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;
use crate::geometry::primitives::{Point, SPolygon};

/// User-entered constraints of a symmetric trapezoidal sheet, all in centimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrapezoidSpec {
    /// Length of the base lying on `y = 0`
    pub bottom_base: f64,
    /// Length of the base lying on `y = height`
    pub top_base: f64,
    /// Distance between both bases
    pub height: f64,
    /// Vertical inflation of the packing region searched by a packer.
    /// Neither alters the trapezoid nor the classification of details, so it never changes which details are placed.
    pub vertical_margin: f64,
}

impl TrapezoidSpec {
    /// Checks all dimensions are positive and the bases differ by at least `min_base_difference`.
    pub fn validate(&self, min_base_difference: f64) -> Result<(), GeometryError> {
        let dims = [
            ("bottom_base", self.bottom_base),
            ("top_base", self.top_base),
            ("height", self.height),
            ("vertical_margin", self.vertical_margin),
        ];
        if let Some((name, value)) = dims.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(GeometryError::InvalidDimensions(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
        if !(min_base_difference.is_finite() && min_base_difference >= 0.0) {
            return Err(GeometryError::InvalidDimensions(format!(
                "minimum base difference must be a non-negative number, got {min_base_difference}"
            )));
        }
        let base_difference = (self.bottom_base - self.top_base).abs();
        if base_difference < min_base_difference {
            return Err(GeometryError::InvalidDimensions(format!(
                "bases differ by {base_difference}, at least {min_base_difference} required"
            )));
        }
        Ok(())
    }
}

/// Derives the isosceles trapezoid described by `spec`, centered on the vertical axis.
///
/// Vertices are ordered bottom-left, bottom-right, top-right, top-left.
/// Fails with [`GeometryError::InvalidDimensions`] before any geometry is produced when `spec` is invalid.
pub fn compute_trapezoid(
    spec: &TrapezoidSpec,
    min_base_difference: f64,
) -> Result<SPolygon, GeometryError> {
    spec.validate(min_base_difference)?;

    let (half_bottom, half_top) = (spec.bottom_base / 2.0, spec.top_base / 2.0);
    let polygon = SPolygon::new(vec![
        Point(-half_bottom, 0.0),
        Point(half_bottom, 0.0),
        Point(half_top, spec.height),
        Point(-half_top, spec.height),
    ])?;

    debug!(
        "[GEOM] trapezoid derived: bottom {}, top {}, height {}, area {:.3}",
        spec.bottom_base, spec.top_base, spec.height, polygon.area
    );

    Ok(polygon)
}
