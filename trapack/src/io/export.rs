use crate::entities::{PackingResult, RectSpec, Sheet};
use crate::io::ext_repr::{ExtPlacement, ExtSolution};

/// Exports a packing result out of the library
pub fn export(
    sheet: &Sheet,
    rect: &RectSpec,
    result: &PackingResult,
    run_time_ms: u64,
) -> ExtSolution {
    let placements = result
        .placements
        .iter()
        .map(|p| {
            let fp = p.footprint(rect);
            ExtPlacement {
                center: p.position.into(),
                x_min: fp.x_min,
                y_min: fp.y_min,
                width: rect.width,
                height: rect.height,
                classification: p.classification,
            }
        })
        .collect();

    let region = &sheet.region;

    ExtSolution {
        sheet: sheet.outer.vertices.iter().map(|&v| v.into()).collect(),
        region: (region.x_min, region.y_min, region.x_max, region.y_max),
        placements,
        n_full: result.n_full(),
        n_tolerant: result.n_tolerant(),
        iterations_used: result.iterations_used,
        exhausted: result.exhausted,
        usage: result.usage(sheet, rect),
        run_time_ms,
    }
}
