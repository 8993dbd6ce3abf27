//! Engine for packing identical rectangular details into trapezoidal sheets.
//!
//! Derives the trapezoid from user constraints and classifies candidate placements as
//! fully inside, overhanging within tolerance, or invalid.

/// Classification of candidate rectangles against the sheet boundary
pub mod classification;

/// Entities to model the trapezoid packing problem
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
