use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Rect, SPolygon};
use crate::geometry::{GeometryError, TrapezoidSpec, compute_trapezoid};

/// Stock sheet into which details are packed.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// Outer boundary against which details are classified
    pub outer: SPolygon,
    /// Region in which the packer searches: the bounding box of `outer`, inflated vertically by the margin
    pub region: Rect,
    /// Vertical margin the region was inflated by, only bounds the search and never changes the placements
    pub vertical_margin: f64,
}

impl Sheet {
    /// Sheet shaped like the trapezoid described by `spec`
    pub fn new(spec: &TrapezoidSpec, min_base_difference: f64) -> Result<Self, GeometryError> {
        let outer = compute_trapezoid(spec, min_base_difference)?;
        Self::from_polygon(outer, spec.vertical_margin)
    }

    /// Sheet with an arbitrary simple polygon as boundary
    pub fn from_polygon(outer: SPolygon, vertical_margin: f64) -> Result<Self, GeometryError> {
        if !(vertical_margin.is_finite() && vertical_margin >= 0.0) {
            return Err(GeometryError::InvalidDimensions(format!(
                "vertical margin must be a non-negative number, got {vertical_margin}"
            )));
        }
        let region = outer.bbox().inflate(0.0, vertical_margin);
        Ok(Sheet {
            outer,
            region,
            vertical_margin,
        })
    }

    pub fn area(&self) -> f64 {
        self.outer.area()
    }
}
