/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod error;
mod trapezoid;

#[doc(inline)]
pub use error::GeometryError;

#[doc(inline)]
pub use trapezoid::{TrapezoidSpec, compute_trapezoid};
