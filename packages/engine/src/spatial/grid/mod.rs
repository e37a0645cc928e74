//! Grid - one contiguous array of liquid cells, row-major (`y * width + x`)
//!
//! Every pass reads the live fields (`count`, `vx`, `vy`) and writes only
//! into the staging fields (`d_count`, `d_vx`, `d_vy`). A commit then folds
//! staging into the live fields for all cells at once, so a cell early in
//! the raster scan never sees what a later cell did in the same scan.
//!
//! Anything outside `[0, width) x [0, height)` reads as a solid, empty wall,
//! which is how the passes get edge collisions for free.

mod cell;
mod indexing;
mod accessors;
mod staging;
mod sparse;

pub use cell::{Cell, MAX_CELL_UNITS};

pub(crate) use cell::WALL;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) cells: Vec<Cell>,

    // Per-row "holds liquid" markers so passes can skip dry rows
    row_has_liquid: Vec<bool>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Cell::default(); size],
            row_has_liquid: vec![false; height as usize],
        }
    }

    /// Read-only view of every cell, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Drop all liquid and solids, keep dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.row_has_liquid.fill(false);
    }
}
