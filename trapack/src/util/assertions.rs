use itertools::Itertools;
use log::error;

use crate::classification::{Classification, ToleranceConfig, classify};
use crate::entities::{PackingResult, Placement, RectSpec, Sheet};
use crate::geometry::geo_traits::{AlmostCollidesWith, Shape};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// No two footprints share more than a boundary
pub fn placements_are_disjoint(placements: &[Placement], rect: &RectSpec) -> bool {
    //sweep along x, only footprints starting before the current one ends can overlap it
    let footprints = placements
        .iter()
        .map(|p| p.footprint(rect))
        .sorted_by(|a, b| a.x_min.total_cmp(&b.x_min))
        .collect_vec();

    for (i, fp1) in footprints.iter().enumerate() {
        for fp2 in footprints[i + 1..]
            .iter()
            .take_while(|fp2| fp2.x_min < fp1.x_max)
        {
            if fp1.almost_collides_with(fp2) {
                error!(
                    "placements at {:?} and {:?} overlap",
                    fp1.centroid(),
                    fp2.centroid()
                );
                return false;
            }
        }
    }
    true
}

/// Every placement is valid and carries the classification it would get when classified anew
pub fn placements_are_classified_correctly(
    result: &PackingResult,
    sheet: &Sheet,
    rect: &RectSpec,
    tolerance: &ToleranceConfig,
) -> bool {
    for placement in result.placements.iter() {
        let corners = rect.corners(placement.position);
        let classification = classify(&corners, &sheet.outer, tolerance);
        if classification == Classification::Invalid || classification != placement.classification
        {
            error!(
                "placement at {:?} is stored as {:?}, but classifies as {:?}",
                placement.position, placement.classification, classification
            );
            return false;
        }
    }
    true
}
