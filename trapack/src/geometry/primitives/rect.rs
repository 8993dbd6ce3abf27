use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;
use crate::geometry::geo_traits::{AlmostCollidesWith, CollidesWith, Shape};
use crate::geometry::primitives::Point;
use crate::util::BOUNDARY_EPSILON;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, GeometryError> {
        if !(x_min < x_max && y_min < y_max) {
            return Err(GeometryError::DegeneratePolygon(format!(
                "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
            )));
        }
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle of `width` by `height` centered at `center`.
    /// Dimensions are expected to be validated beforehand (see [`RectSpec`](crate::entities::RectSpec)).
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let (half_w, half_h) = (width / 2.0, height / 2.0);
        Rect {
            x_min: center.0 - half_w,
            y_min: center.1 - half_h,
            x_max: center.0 + half_w,
            y_max: center.1 + half_h,
        }
    }

    /// Returns a new rectangle grown by `dx` on the left and right and `dy` on the bottom and top.
    pub fn inflate(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Corners in counterclockwise order, starting at the bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) <= f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) <= f64::min(self.y_max, other.y_max)
    }
}

impl AlmostCollidesWith<Rect> for Rect {
    /// Two rectangles only collide if they overlap by more than rounding noise on both axes.
    /// Rectangles sharing a boundary, computed independently and a few ulps apart, do not collide.
    #[inline(always)]
    fn almost_collides_with(&self, other: &Rect) -> bool {
        overlaps_significantly(
            f64::max(self.x_min, other.x_min),
            f64::min(self.x_max, other.x_max),
        ) && overlaps_significantly(
            f64::max(self.y_min, other.y_min),
            f64::min(self.y_max, other.y_max),
        )
    }
}

/// Interval `[lo, hi]` is longer than [`BOUNDARY_EPSILON`], scaled to the magnitude of its bounds.
fn overlaps_significantly(lo: f64, hi: f64) -> bool {
    let scale = f64::max(1.0, f64::max(lo.abs(), hi.abs()));
    hi - lo > BOUNDARY_EPSILON * scale
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
