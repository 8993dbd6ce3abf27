use anyhow::{Context, Result};
use log::debug;

use crate::entities::{RectSpec, Sheet};
use crate::geometry::TrapezoidSpec;
use crate::io::ext_repr::{ExtDetail, ExtInstance, ExtTrapezoid};

/// Converts external representations of sheets and details into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Minimum required difference between both bases of a trapezoid
    pub min_base_difference: f64,
    /// Margin used for trapezoids which do not specify one
    pub default_vertical_margin: f64,
}

impl Importer {
    pub fn new(min_base_difference: f64, default_vertical_margin: f64) -> Importer {
        Importer {
            min_base_difference,
            default_vertical_margin,
        }
    }

    pub fn import_trapezoid(&self, ext_trapezoid: &ExtTrapezoid) -> Result<Sheet> {
        let spec = TrapezoidSpec {
            bottom_base: ext_trapezoid.bottom_base,
            top_base: ext_trapezoid.top_base,
            height: ext_trapezoid.height,
            vertical_margin: ext_trapezoid
                .vertical_margin
                .unwrap_or(self.default_vertical_margin),
        };
        let sheet = Sheet::new(&spec, self.min_base_difference)?;
        Ok(sheet)
    }

    pub fn import_detail(&self, ext_detail: &ExtDetail) -> Result<RectSpec> {
        let rect = RectSpec::new(ext_detail.width, ext_detail.height)?;
        Ok(rect)
    }
}

/// Imports an instance into the library
pub fn import(importer: &Importer, ext_instance: &ExtInstance) -> Result<(Sheet, RectSpec)> {
    let sheet = importer
        .import_trapezoid(&ext_instance.trapezoid)
        .with_context(|| format!("invalid trapezoid in instance '{}'", ext_instance.name))?;
    let rect = importer
        .import_detail(&ext_instance.detail)
        .with_context(|| format!("invalid detail in instance '{}'", ext_instance.name))?;

    debug!(
        "[IMPORT] instance '{}': sheet area {:.3}, detail {}x{}",
        ext_instance.name,
        sheet.area(),
        rect.width,
        rect.height
    );

    Ok((sheet, rect))
}
