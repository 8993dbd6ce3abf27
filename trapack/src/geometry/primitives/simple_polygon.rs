use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::GeometryError;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, SeparationDistance, Shape};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::util::BOUNDARY_EPSILON;

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges, the last vertex connects back to the first.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Set of points that form the polygon, ordered counterclockwise
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Vertices given in clockwise order are reversed, so edges always run counterclockwise.
    pub fn new(mut points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::DegeneratePolygon(format!(
                "simple polygon must have at least 3 points: {points:?}"
            )));
        }
        if points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            return Err(GeometryError::DegeneratePolygon(format!(
                "simple polygon contains non-finite coordinates: {points:?}"
            )));
        }
        if points.iter().unique().count() != points.len() {
            return Err(GeometryError::DegeneratePolygon(format!(
                "simple polygon should not contain duplicate points: {points:?}"
            )));
        }

        let area = match SPolygon::calculate_area(&points) {
            0.0 => {
                return Err(GeometryError::DegeneratePolygon(format!(
                    "simple polygon has no area: {points:?}"
                )));
            }
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        let bbox = SPolygon::generate_bounding_box(&points)?;

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        //vertices are unique, so none of the edges are degenerate
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn generate_bounding_box(points: &[Point]) -> Result<Rect, GeometryError> {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let area = self.area;
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = if i == self.n_vertices() - 1 { 0 } else { i + 1 };
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        c_x /= 6.0 * area;
        c_y /= 6.0 * area;

        (c_x, c_y).into()
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl CollidesWith<Point> for SPolygon {
    /// Point-in-polygon test.
    ///
    /// Points on (or within [`BOUNDARY_EPSILON`] of) the boundary are considered inside.
    /// All other points are resolved with the crossing number of a horizontal ray shot to the right.
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        let search_box = self.bbox.inflate(BOUNDARY_EPSILON, BOUNDARY_EPSILON);
        match search_box.collides_with(point) {
            false => false,
            true => {
                let sq_eps = BOUNDARY_EPSILON * BOUNDARY_EPSILON;
                if self.edge_iter().any(|e| e.sq_distance_to(point) <= sq_eps) {
                    return true;
                }
                let Point(p_x, p_y) = *point;
                let mut n_intersections = 0;
                for edge in self.edge_iter() {
                    let (Point(s_x, s_y), Point(e_x, e_y)) = (edge.start, edge.end);
                    //half-open rule: an edge counts if it straddles the ray, vertices on the ray are attributed to the edge above.
                    //Horizontal edges never straddle, so no division by zero.
                    if (s_y > p_y) != (e_y > p_y) {
                        let x_cross = s_x + (p_y - s_y) * (e_x - s_x) / (e_y - s_y);
                        if p_x < x_cross {
                            n_intersections += 1;
                        }
                    }
                }
                n_intersections % 2 == 1
            }
        }
    }
}

impl SeparationDistance<Point> for SPolygon {
    fn separation_distance(&self, point: &Point) -> (GeoPosition, f64) {
        let (position, sq_distance) = self.sq_separation_distance(point);
        (position, sq_distance.sqrt())
    }

    fn sq_separation_distance(&self, point: &Point) -> (GeoPosition, f64) {
        let distance_to_closest_edge = self.sq_distance_to_boundary(point);

        match self.collides_with(point) {
            true => (GeoPosition::Interior, distance_to_closest_edge),
            false => (GeoPosition::Exterior, distance_to_closest_edge),
        }
    }
}

impl SPolygon {
    fn sq_distance_to_boundary(&self, point: &Point) -> f64 {
        self.edge_iter()
            .map(|edge| OrderedFloat(edge.sq_distance_to(point)))
            .min()
            .map_or(f64::INFINITY, |d| d.into_inner())
    }
}
