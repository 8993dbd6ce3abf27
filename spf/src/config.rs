use serde::{Deserialize, Serialize};

use trapack::classification::ToleranceConfig;
use trapack::geometry::GeometryError;
use trapack::io::import::Importer;

use crate::opt::spiral::SpiralSeed;

/// Configuration for the SPF packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SPFConfig {
    /// Maximum distance (cm) a detail corner may overhang the sheet boundary
    pub tolerance_cm: f64,
    /// Vertical inflation (cm) of the packing region, for instances which do not define their own
    pub vertical_margin_cm: f64,
    /// Minimum difference (cm) between the two bases of a trapezoid
    pub min_base_difference: f64,
    /// Hard cap on the number of candidate positions visited by the spiral
    pub max_spiral_iterations: usize,
    /// Anchor of the spiral grid
    #[serde(default)]
    pub seed: SpiralSeed,
}

impl SPFConfig {
    pub fn tolerance(&self) -> Result<ToleranceConfig, GeometryError> {
        ToleranceConfig::new(self.tolerance_cm)
    }

    pub fn importer(&self) -> Importer {
        Importer::new(self.min_base_difference, self.vertical_margin_cm)
    }
}

impl Default for SPFConfig {
    fn default() -> Self {
        Self {
            tolerance_cm: 0.5,
            vertical_margin_cm: 1.0,
            min_base_difference: 1.0,
            max_spiral_iterations: 100_000,
            seed: SpiralSeed::default(),
        }
    }
}
