use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info, trace};
use thousands::Separable;

use trapack::classification::{Classification, ToleranceConfig, classify};
use trapack::entities::{PackingResult, Placement, RectSpec, Sheet};
use trapack::geometry::GeometryError;
use trapack::geometry::geo_traits::CollidesWith;
use trapack::util::assertions;

use crate::config::SPFConfig;
use crate::opt::spiral::{GridCell, SpiralGrid, SpiralIterator, SpiralSeed};

/// Packs `rect` into `sheet` with the spiral seeded at the bottom-center of the sheet.
///
/// Stops after `max_iterations` candidates (`exhausted` is set) or once the spiral outgrows the packing region.
pub fn pack(
    sheet: &Sheet,
    rect: &RectSpec,
    tolerance: &ToleranceConfig,
    max_iterations: usize,
) -> PackingResult {
    SpiralPacker::new(sheet, *rect, *tolerance, max_iterations).solve()
}

/// Spiral Placement Fill (SPF): greedy constructive packer visiting the cells of a detail-sized grid
/// in an outward spiral and keeping every cell that classifies as valid and does not overlap earlier placements.
#[derive(Debug, Clone)]
pub struct SpiralPacker<'a> {
    pub sheet: &'a Sheet,
    pub rect: RectSpec,
    pub tolerance: ToleranceConfig,
    pub seed: SpiralSeed,
    pub max_iterations: usize,
}

impl<'a> SpiralPacker<'a> {
    pub fn new(
        sheet: &'a Sheet,
        rect: RectSpec,
        tolerance: ToleranceConfig,
        max_iterations: usize,
    ) -> Self {
        Self {
            sheet,
            rect,
            tolerance,
            seed: SpiralSeed::default(),
            max_iterations,
        }
    }

    pub fn from_config(
        sheet: &'a Sheet,
        rect: RectSpec,
        config: &SPFConfig,
    ) -> Result<Self, GeometryError> {
        let packer = Self::new(sheet, rect, config.tolerance()?, config.max_spiral_iterations)
            .with_seed(config.seed);
        Ok(packer)
    }

    pub fn with_seed(mut self, seed: SpiralSeed) -> Self {
        self.seed = seed;
        self
    }

    pub fn solve(&self) -> PackingResult {
        let start = Instant::now();
        let tolerance_cm = self.tolerance.tolerance_cm;

        let grid = SpiralGrid::new(self.sheet, &self.rect, self.seed);
        //candidates entirely outside this box can never be within tolerance
        let search_box = self.sheet.region.inflate(tolerance_cm, tolerance_cm);
        let ring_limit = grid.ring_limit(&search_box);

        info!(
            "[SPF] packing {}x{} details, spiral from {:?} up to ring {} (max {} iterations)",
            self.rect.width,
            self.rect.height,
            grid.origin,
            ring_limit,
            self.max_iterations.separate_with_commas()
        );

        let mut placements: Vec<Placement> = vec![];
        //grid cells tile the plane, so two footprints overlap exactly when they occupy the same cell
        let mut occupied: HashSet<GridCell> = HashSet::new();
        let mut iterations_used = 0;
        let mut exhausted = false;

        for cell in SpiralIterator::default() {
            if cell.ring() > ring_limit {
                //no remaining cell can touch the packing region
                break;
            }
            if iterations_used >= self.max_iterations {
                exhausted = true;
                break;
            }
            iterations_used += 1;

            let center = grid.position(cell);
            let footprint = self.rect.footprint(center);

            if !search_box.collides_with(&footprint) {
                trace!("[SPF] {cell:?} rejected, outside of search box");
                continue;
            }

            let classification = classify(&footprint.corners(), &self.sheet.outer, &self.tolerance);
            if classification == Classification::Invalid {
                trace!("[SPF] {cell:?} rejected, overhang exceeds tolerance");
                continue;
            }

            if !occupied.insert(cell) {
                trace!("[SPF] {cell:?} rejected, overlaps an earlier placement");
                continue;
            }

            debug!(
                "[SPF] placing detail {} at {:?} ({:?})",
                placements.len() + 1,
                center,
                classification
            );
            placements.push(Placement {
                position: center,
                classification,
            });
        }

        let result = PackingResult {
            placements,
            iterations_used,
            exhausted,
        };

        debug_assert!(assertions::placements_are_disjoint(
            &result.placements,
            &self.rect
        ));
        debug_assert!(assertions::placements_are_classified_correctly(
            &result,
            self.sheet,
            &self.rect,
            &self.tolerance
        ));

        info!(
            "[SPF] packing finished in {:.3}ms ({} iterations{})",
            start.elapsed().as_secs_f64() * 1000.0,
            result.iterations_used.separate_with_commas(),
            match result.exhausted {
                true => ", iteration cap reached",
                false => "",
            }
        );
        info!(
            "[SPF] {} details placed ({} full, {} tolerant) with a usage of {:.3}%",
            result.placements.len(),
            result.n_full(),
            result.n_tolerant(),
            result.usage(self.sheet, &self.rect) * 100.0
        );

        result
    }
}
