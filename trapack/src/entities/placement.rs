use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::entities::{RectSpec, Sheet};
use crate::geometry::primitives::{Point, Rect};

/// An accepted detail, positioned by the center of its footprint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Point,
    /// Either [`Classification::Full`] or [`Classification::Tolerant`], never [`Classification::Invalid`]
    pub classification: Classification,
}

impl Placement {
    pub fn footprint(&self, rect: &RectSpec) -> Rect {
        rect.footprint(self.position)
    }
}

/// Outcome of a single packing run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PackingResult {
    /// Accepted placements, in order of acceptance
    pub placements: Vec<Placement>,
    /// Number of candidate positions the search produced
    pub iterations_used: usize,
    /// `true` if the search was cut off by the iteration cap instead of running out of candidates
    pub exhausted: bool,
}

impl PackingResult {
    pub fn n_full(&self) -> usize {
        self.count(Classification::Full)
    }

    pub fn n_tolerant(&self) -> usize {
        self.count(Classification::Tolerant)
    }

    /// Ratio of the total detail area to the area of the sheet
    pub fn usage(&self, sheet: &Sheet, rect: &RectSpec) -> f64 {
        self.placements.len() as f64 * rect.area() / sheet.area()
    }

    fn count(&self, classification: Classification) -> usize {
        self.placements
            .iter()
            .filter(|p| p.classification == classification)
            .count()
    }
}
