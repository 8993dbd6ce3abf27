use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::SeparationDistance;
use crate::geometry::primitives::{Point, SPolygon};
use crate::util::FPA;

/// How far a rectangle corner may stick out of the sheet and still be cuttable.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ToleranceConfig {
    /// Maximum outward distance (in centimeters) of a corner beyond the sheet boundary
    pub tolerance_cm: f64,
}

impl ToleranceConfig {
    pub fn new(tolerance_cm: f64) -> Result<Self, GeometryError> {
        if !(tolerance_cm.is_finite() && tolerance_cm >= 0.0) {
            return Err(GeometryError::InvalidDimensions(format!(
                "tolerance must be a non-negative number, got {tolerance_cm}"
            )));
        }
        Ok(Self { tolerance_cm })
    }
}

/// Outcome of checking a rectangle against the sheet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// All four corners lie inside the sheet (boundary included)
    Full,
    /// At least one corner is outside, none further than the tolerance
    Tolerant,
    /// A corner sticks out further than the tolerance
    Invalid,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }
}

/// Classifies a rectangle, given by its four corners, against `polygon`.
///
/// The overhang of a rectangle is the largest distance between any of its outside corners and the boundary.
/// An overhang equal to the tolerance still classifies as [`Classification::Tolerant`].
pub fn classify(
    rect_corners: &[Point; 4],
    polygon: &SPolygon,
    tolerance: &ToleranceConfig,
) -> Classification {
    match overhang(rect_corners, polygon) {
        None => Classification::Full,
        Some(d) if FPA(d) <= FPA(tolerance.tolerance_cm) => Classification::Tolerant,
        Some(_) => Classification::Invalid,
    }
}

/// Largest distance between a corner outside `polygon` and its boundary, `None` if all corners are inside.
pub fn overhang(rect_corners: &[Point; 4], polygon: &SPolygon) -> Option<f64> {
    rect_corners
        .iter()
        .filter_map(|corner| match polygon.separation_distance(corner) {
            (GeoPosition::Exterior, d) => Some(d),
            (GeoPosition::Interior, _) => None,
        })
        .reduce(f64::max)
}
