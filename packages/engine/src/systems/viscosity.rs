//! Viscosity - count-weighted smoothing of the velocity field
//!
//! Summing raw momentum over a neighbourhood and dividing by the summed
//! count gives the count-weighted mean per-unit velocity; emptier cells pull
//! less. Scaling that back by the cell's own count keeps momentum
//! proportional to mass.

use crate::domain::config::SimConfig;
use crate::grid::Grid;

/// Smooth velocities of all wet cells, then commit
pub fn apply_viscosity(grid: &mut Grid, cfg: &SimConfig) {
    let width = grid.width();
    let height = grid.height();
    let r = cfg.viscosity_radius;
    let blend = cfg.viscosity;

    for y in 0..height {
        if !grid.row_has_liquid(y) {
            continue;
        }
        for x in 0..width {
            let idx = grid.index(x, y);
            let cell = grid.cells[idx];
            if cell.count == 0 {
                continue;
            }

            let (xi, yi) = (x as i32, y as i32);
            let mut mx = 0.0f32;
            let mut my = 0.0f32;
            let mut mass = 0u64;
            for oy in -r..=r {
                for ox in -r..=r {
                    let n = grid.at_or_wall(xi + ox, yi + oy);
                    mx += n.vx;
                    my += n.vy;
                    mass += n.count as u64;
                }
            }

            let (vx, vy) = if mass == 0 {
                (cell.vx, cell.vy)
            } else {
                let scale = cell.count as f32 / mass as f32;
                let (ax, ay) = (mx * scale, my * scale);
                (
                    cell.vx + (ax - cell.vx) * blend,
                    cell.vy + (ay - cell.vy) * blend,
                )
            };

            let c = &mut grid.cells[idx];
            c.d_vx = vx;
            c.d_vy = vy;
        }
    }

    grid.commit_velocity();
}
