use serde::{Deserialize, Serialize};

use crate::classification::Classification;

/// External representation of a packing instance: a trapezoidal sheet and the detail to pack into it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// Name of the instance
    pub name: String,
    /// Shape of the sheet
    pub trapezoid: ExtTrapezoid,
    /// The repeating detail
    pub detail: ExtDetail,
}

/// External representation of a [`TrapezoidSpec`](crate::geometry::TrapezoidSpec).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtTrapezoid {
    pub bottom_base: f64,
    pub top_base: f64,
    pub height: f64,
    /// Falls back to the importer's default margin if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vertical_margin: Option<f64>,
}

/// External representation of a [`RectSpec`](crate::entities::RectSpec).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtDetail {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Center of the detail
    pub center: (f64, f64),
    /// Bottom-left corner of the detail's footprint
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
    pub classification: Classification,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Vertices of the sheet, counterclockwise
    pub sheet: Vec<(f64, f64)>,
    /// Packing region searched, as (x_min, y_min, x_max, y_max)
    pub region: (f64, f64, f64, f64),
    pub placements: Vec<ExtPlacement>,
    pub n_full: usize,
    pub n_tolerant: usize,
    pub iterations_used: usize,
    pub exhausted: bool,
    /// Ratio of the total detail area to the sheet area
    pub usage: f64,
    pub run_time_ms: u64,
}
