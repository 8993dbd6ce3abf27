/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;

/// Distance (in centimeters) within which a point is considered to lie on a polygon's boundary.
pub const BOUNDARY_EPSILON: f64 = 1e-9;
