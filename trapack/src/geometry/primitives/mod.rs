mod edge;
mod point;
mod rect;
mod simple_polygon;

#[doc(inline)]
pub use edge::{Edge, distance_to_segment};
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use simple_polygon::SPolygon;
