//! Pressure resolution - local leveling of unit counts
//!
//! A cell holding more than one unit tries a few random neighbours and
//! hands one unit to the first open cell that holds strictly fewer units.
//! The moved unit carries part of the source's momentum plus a push along
//! the offset, which is what lets a compressed column spill sideways and
//! upwards. Repeating the pass spreads pressure several cells per frame.
//!
//! Moving a unit up needs one extra unit of difference per cell of rise,
//! so a column whose count grows by at most one per cell downwards is at
//! rest.

use crate::domain::config::SimConfig;
use crate::grid::Grid;

use super::random::{Offset, OffsetSource};

/// Would a unit leaving `(x, y)` along `o` end up in an open cell?
#[inline]
fn path_is_open(grid: &Grid, x: i32, y: i32, o: Offset) -> bool {
    !grid.is_solid(x + o.dx / 2, y + o.dy / 2) && !grid.is_solid(x + o.dx, y + o.dy)
}

/// One scan over the grid; deltas land in staging. Returns units moved.
pub fn pressure_pass(grid: &mut Grid, cfg: &SimConfig, offsets: &mut OffsetSource) -> u32 {
    let width = grid.width();
    let height = grid.height();
    let mut transfers = 0u32;

    for y in 0..height {
        if !grid.row_has_liquid(y) {
            continue;
        }
        for x in 0..width {
            let src = grid.index(x, y);
            let cell = grid.cells[src];
            if cell.solid || cell.count <= 1 {
                continue;
            }

            let (xi, yi) = (x as i32, y as i32);
            for _ in 0..cfg.pressure_attempts {
                let o = offsets.next_offset(cell.count, cfg.pressure_radius);
                if !path_is_open(grid, xi, yi, o) {
                    continue;
                }
                let Some(dst) = grid.checked_index(xi + o.dx, yi + o.dy) else {
                    continue;
                };
                // Lifting a unit costs one count per cell of rise
                let rise = (-o.dy).max(0) as u32;
                let dst_count = grid.cells[dst].count;
                if dst_count.saturating_add(rise) >= cell.count {
                    continue;
                }

                let (ux, uy) = cell.unit_velocity();
                let carried_x = ux * cfg.momentum_transfer;
                let carried_y = uy * cfg.momentum_transfer;

                // No upward kick into a cell that already rests on something
                let push_y = if o.dy < 0 && grid.is_supported(xi + o.dx, yi + o.dy, dst_count + 1) {
                    0.0
                } else {
                    o.dy.signum() as f32 * cfg.pressure_push
                };

                let target = &mut grid.cells[dst];
                target.d_count += 1;
                target.d_vx += carried_x + o.dx.signum() as f32 * cfg.pressure_push;
                target.d_vy += carried_y + push_y;

                let source = &mut grid.cells[src];
                source.d_count -= 1;
                source.d_vx -= carried_x;
                source.d_vy -= carried_y;

                transfers = transfers.saturating_add(1);
                break;
            }
        }
    }

    transfers
}

/// Run the configured number of passes, committing after each scan.
pub fn resolve_pressure(grid: &mut Grid, cfg: &SimConfig, offsets: &mut OffsetSource) -> u32 {
    let mut transfers = 0u32;
    for _ in 0..cfg.pressure_passes {
        transfers = transfers.saturating_add(pressure_pass(grid, cfg, offsets));
        grid.commit_accumulate();
    }
    transfers
}
