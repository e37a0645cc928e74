use std::io::Cursor;

use crate::error::EngineError;
use crate::grid::Cell;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::WorldCore;

// ABGR (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA]), straight into ImageData
pub(crate) const BG_COLOR: u32 = abgr(10, 10, 10);
pub(crate) const SOLID_COLOR: u32 = abgr(150, 120, 90);

const LIQUID_ALPHA: u32 = 100;
const LIQUID_GREEN_PER_UNIT: u32 = 50;

#[inline]
const fn abgr(r: u32, g: u32, b: u32) -> u32 {
    0xFF00_0000 | (b << 16) | (g << 8) | r
}

#[inline]
fn over_bg(src: u32, bg: u32) -> u32 {
    (src * LIQUID_ALPHA + bg * (255 - LIQUID_ALPHA)) / 255
}

/// Deeper cells get a lighter, greener blue
#[inline]
pub(crate) fn cell_color(cell: &Cell) -> u32 {
    if cell.solid {
        return SOLID_COLOR;
    }
    if cell.count == 0 {
        return BG_COLOR;
    }
    let g = cell.count.saturating_mul(LIQUID_GREEN_PER_UNIT).min(255);
    abgr(over_bg(0, 10), over_bg(g, 10), over_bg(255, 10))
}

pub(super) fn render(world: &mut WorldCore) -> &[u32] {
    let size = world.grid.size();
    if world.pixels.len() != size {
        world.pixels.resize(size, BG_COLOR);
    }

    #[cfg(feature = "parallel")]
    {
        world
            .pixels
            .par_iter_mut()
            .zip(world.grid.cells.par_iter())
            .for_each(|(px, cell)| *px = cell_color(cell));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (px, cell) in world.pixels.iter_mut().zip(world.grid.cells.iter()) {
            *px = cell_color(cell);
        }
    }

    &world.pixels
}

pub(super) fn snapshot_png(world: &WorldCore) -> Result<Vec<u8>, EngineError> {
    let raw: Vec<u8> = world.pixels.iter().flat_map(|px| px.to_le_bytes()).collect();
    let img = image::RgbaImage::from_raw(world.width(), world.height(), raw)
        .ok_or_else(|| EngineError::Encode("pixel buffer does not match grid size".to_string()))?;

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageOutputFormat::Png)
        .map_err(|e| EngineError::Encode(e.to_string()))?;
    Ok(out)
}
