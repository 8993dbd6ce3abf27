use std::time::Instant;

use anyhow::Result;
use log::info;
use rayon::prelude::*;

use trapack::entities::{PackingResult, RectSpec, Sheet};
use trapack::io::ext_repr::ExtInstance;
use trapack::io::import;

use crate::config::SPFConfig;
use crate::opt::packer::SpiralPacker;

/// Packing of a single instance within a batch
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub sheet: Sheet,
    pub rect: RectSpec,
    pub result: PackingResult,
    pub run_time_ms: u64,
}

/// Packs independent instances in parallel.
///
/// Every instance runs its own sequential spiral, so the outcomes equal those of packing the instances one by one.
/// Outcomes are returned in the order of `instances`; an instance that fails to import yields its error.
pub fn pack_batch(
    instances: &[ExtInstance],
    config: &SPFConfig,
) -> Result<Vec<Result<BatchOutcome>>> {
    //an invalid configuration fails the whole batch before any instance is imported
    config.tolerance()?;
    let importer = config.importer();

    info!("[BATCH] packing {} instances", instances.len());

    let outcomes: Vec<Result<BatchOutcome>> = instances
        .par_iter()
        .map(|ext_instance| -> Result<BatchOutcome> {
            let (sheet, rect) = import::import(&importer, ext_instance)?;
            let start = Instant::now();
            let result = SpiralPacker::from_config(&sheet, rect, config)?.solve();
            let run_time_ms = start.elapsed().as_millis() as u64;
            Ok(BatchOutcome {
                sheet,
                rect,
                result,
                run_time_ms,
            })
        })
        .collect();

    Ok(outcomes)
}
