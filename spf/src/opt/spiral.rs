use serde::{Deserialize, Serialize};

use trapack::entities::{RectSpec, Sheet};
use trapack::geometry::geo_traits::Shape;
use trapack::geometry::primitives::{Point, Rect};

/// Anchor of the spiral grid
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpiralSeed {
    /// First cell rests on the middle of the bottom base, so rows line up with it
    #[default]
    BottomCenter,
    /// First cell is centered on the centroid of the sheet
    Centroid,
}

/// Cell of the spiral grid, relative to the seed cell at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: i64,
    pub row: i64,
}

impl GridCell {
    /// Index of the square ring around the seed cell this cell belongs to
    pub fn ring(&self) -> u64 {
        u64::max(self.col.unsigned_abs(), self.row.unsigned_abs())
    }
}

/// Maps the index of a spiral step to its grid cell.
///
/// Ring `r > 0` holds the `8r` cells with indices `(2r-1)^2..(2r+1)^2`, walked counterclockwise:
/// up the right side, left along the top, down the left side and right along the bottom.
/// e.g. 0 -> (0,0), 1 -> (1,0), 2 -> (1,1), 3 -> (0,1), 4 -> (-1,1), ..., 8 -> (1,-1), 9 -> (2,-1)
pub fn spiral_cell(index: u64) -> GridCell {
    if index == 0 {
        return GridCell { col: 0, row: 0 };
    }
    let ring = (index.isqrt() + 1) / 2;
    let side_len = 2 * ring;
    let offset = index - (side_len - 1).pow(2);

    let r = ring as i64;
    let t = (offset % side_len) as i64;
    let (col, row) = match offset / side_len {
        0 => (r, -r + 1 + t),
        1 => (r - 1 - t, r),
        2 => (-r, r - 1 - t),
        _ => (-r + 1 + t, -r),
    };
    GridCell { col, row }
}

/// Iterates over the cells of the spiral grid from the seed outwards
#[derive(Debug, Clone, Default)]
pub struct SpiralIterator {
    index: u64,
}

impl Iterator for SpiralIterator {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = spiral_cell(self.index);
        self.index += 1;
        Some(cell)
    }
}

/// Grid with cells the size of a detail, anchored at the seed position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralGrid {
    /// Center of the seed cell
    pub origin: Point,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl SpiralGrid {
    pub fn new(sheet: &Sheet, rect: &RectSpec, seed: SpiralSeed) -> Self {
        let bbox = sheet.outer.bbox();
        let origin = match seed {
            SpiralSeed::BottomCenter => Point(
                (bbox.x_min + bbox.x_max) / 2.0,
                bbox.y_min + rect.height / 2.0,
            ),
            SpiralSeed::Centroid => sheet.outer.centroid(),
        };
        SpiralGrid {
            origin,
            cell_width: rect.width,
            cell_height: rect.height,
        }
    }

    /// Center of `cell`, computed directly from its indices so no rounding error accumulates along the spiral
    pub fn position(&self, cell: GridCell) -> Point {
        Point(
            self.origin.0 + cell.col as f64 * self.cell_width,
            self.origin.1 + cell.row as f64 * self.cell_height,
        )
    }

    /// Highest ring containing a cell whose footprint can still touch `search_box`
    pub fn ring_limit(&self, search_box: &Rect) -> u64 {
        let Point(o_x, o_y) = self.origin;
        let reach_x = f64::max(search_box.x_max - o_x, o_x - search_box.x_min);
        let reach_y = f64::max(search_box.y_max - o_y, o_y - search_box.y_min);

        let cols = (reach_x / self.cell_width).ceil().max(0.0);
        let rows = (reach_y / self.cell_height).ceil().max(0.0);
        f64::max(cols, rows) as u64
    }
}
