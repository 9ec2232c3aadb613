//! Tile grid geometry: where a tile lands on its page.
//!
//! All values are in centimeters with the origin at the page's top-left corner. Back pages
//! mirror columns so a sheet flipped about its vertical axis puts each back tile directly
//! under its front tile.

use crate::foundation::core::TilePosition;

/// A4 page width.
pub const PAGE_WIDTH_CM: f64 = 21.0;
/// A4 page height.
pub const PAGE_HEIGHT_CM: f64 = 29.7;
/// Side length of a square tile.
pub const TILE_SIZE_CM: f64 = 6.0;
/// Offset of the grid from the page's top and left edges.
pub const MARGIN_CM: f64 = 1.5;
/// Gap between neighboring tiles.
pub const SPACING_CM: f64 = 0.0;
pub const TILES_PER_ROW: usize = 3;
pub const ROWS_PER_PAGE: usize = 4;
/// Tiles on one page.
pub const TILES_PER_PAGE: usize = TILES_PER_ROW * ROWS_PER_PAGE;

/// Row/column of a tile within its page grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn position(self) -> TilePosition {
        let pitch = TILE_SIZE_CM + SPACING_CM;
        TilePosition::new(
            MARGIN_CM + self.col as f64 * pitch,
            MARGIN_CM + self.row as f64 * pitch,
        )
    }
}

/// Cell of front tile `index`; `index` may be a global song index (wraps every page).
pub fn front_cell(index: usize) -> GridCell {
    GridCell {
        row: (index % TILES_PER_PAGE) / TILES_PER_ROW,
        col: index % TILES_PER_ROW,
    }
}

/// Cell of the back tile in `slot` (0-based position within its back page).
pub fn back_cell(slot: usize) -> GridCell {
    let slot = slot % TILES_PER_PAGE;
    GridCell {
        row: slot / TILES_PER_ROW,
        col: TILES_PER_ROW - 1 - (slot % TILES_PER_ROW),
    }
}

pub fn front_position(index: usize) -> TilePosition {
    front_cell(index).position()
}

pub fn back_position(slot: usize) -> TilePosition {
    back_cell(slot).position()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
