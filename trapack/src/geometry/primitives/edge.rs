use crate::geometry::GeometryError;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        if start == end {
            return Err(GeometryError::DegeneratePolygon(format!(
                "zero-length edge, {start:?} == {end:?}"
            )));
        }
        Ok(Edge { start, end })
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        closest_point_on_segment(point, &self.start, &self.end)
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        point.sq_distance_to(&self.closest_point_on_edge(point))
    }
}

/// Shortest distance from `p` to the segment between `a` and `b`.
///
/// A zero-length segment (`a == b`) degrades to the distance between `p` and `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    p.distance_to(&closest_point_on_segment(&p, &a, &b))
}

#[inline(always)]
fn closest_point_on_segment(point: &Point, start: &Point, end: &Point) -> Point {
    //from https://stackoverflow.com/a/6853926
    let Point(x1, y1) = *start;
    let Point(x2, y2) = *end;
    let Point(x, y) = *point;

    let a = x - x1;
    let b = y - y1;
    let c = x2 - x1;
    let d = y2 - y1;

    let len_sq = c * c + d * d;
    if len_sq == 0.0 {
        //degenerate segment, both ends coincide
        return *start;
    }
    let param = (a * c + b * d) / len_sq;

    match param {
        p if p <= 0.0 => *start, //start is the closest point
        p if p >= 1.0 => *end, //end is the closest point
        p => Point(x1 + p * c, y1 + p * d), //closest point is on the edge
    }
}
