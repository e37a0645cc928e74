//! Flow step - gravity, friction and stochastic displacement
//!
//! Every unit of a wet cell integrates the cell's per-unit velocity, turns
//! it into an integer grid step by stochastic rounding, resolves collisions
//! and lands in the destination's staging fields. One replace-commit at the
//! end makes the whole step visible at once.
//!
//! A cell resting on terrain or on liquid at least as deep gains no
//! downward speed, so a settled column stays put instead of re-stacking.

use crate::domain::config::SimConfig;
use crate::grid::Grid;

use super::random::Rng;

/// Outcome of moving a single unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitStep {
    pub dx: i32,
    pub dy: i32,
    /// Per-unit velocity after collisions zeroed blocked axes
    pub vx: f32,
    pub vy: f32,
}

/// Per-unit velocity after one step of gravity and friction
#[inline]
pub fn integrate(unit_vx: f32, unit_vy: f32, cfg: &SimConfig) -> (f32, f32) {
    let vx = unit_vx * cfg.friction;
    let vy = (unit_vy + cfg.gravity) * cfg.friction;
    (
        vx.clamp(-cfg.max_speed, cfg.max_speed),
        vy.clamp(-cfg.max_speed, cfg.max_speed),
    )
}

/// Apply the collision policy to a tentative displacement.
///
/// The order matters: a solid midpoint shortens the step first (so a fast
/// unit cannot hop over a one-cell wall), then the horizontal move is
/// checked on the current row, then the full destination.
#[inline]
pub fn resolve_collisions(grid: &Grid, x: i32, y: i32, step: UnitStep, wall_slowdown: i32) -> UnitStep {
    let UnitStep { mut dx, mut dy, mut vx, mut vy } = step;

    if grid.is_solid(x + dx / 2, y + dy / 2) {
        dx /= wall_slowdown;
        dy /= wall_slowdown;
    }
    if grid.is_solid(x + dx, y) {
        dx = 0;
        vx = 0.0;
    }
    if grid.is_solid(x + dx, y + dy) {
        dy = 0;
        vy = 0.0;
    }

    UnitStep { dx, dy, vx, vy }
}

/// Advance every wet cell by one flow step. Returns how many units moved.
pub fn apply_flow(grid: &mut Grid, cfg: &SimConfig, rng: &mut Rng) -> u32 {
    let width = grid.width();
    let height = grid.height();
    let mut moved = 0u32;

    for y in 0..height {
        if !grid.row_has_liquid(y) {
            continue;
        }
        for x in 0..width {
            let idx = grid.index(x, y);
            let cell = grid.cells[idx];
            if cell.count == 0 || cell.solid {
                continue;
            }

            let (ux, uy) = cell.unit_velocity();
            let (vx, mut vy) = integrate(ux, uy, cfg);
            let (xi, yi) = (x as i32, y as i32);

            // Resting liquid treats its support like a floor
            if grid.is_supported(xi, yi, cell.count) {
                vy = vy.min(0.0);
            }

            for _ in 0..cell.count {
                let tentative = UnitStep {
                    dx: rng.stochastic_round(vx),
                    dy: rng.stochastic_round(vy),
                    vx,
                    vy,
                };
                let step = resolve_collisions(grid, xi, yi, tentative, cfg.wall_slowdown);

                // The collision policy only ever leaves open, in-bounds cells
                let dst = grid
                    .checked_index(xi + step.dx, yi + step.dy)
                    .filter(|&d| !grid.cells[d].solid)
                    .unwrap_or(idx);

                let target = &mut grid.cells[dst];
                target.d_count += 1;
                target.d_vx += step.vx;
                target.d_vy += step.vy;

                if dst != idx {
                    moved = moved.saturating_add(1);
                }
            }
        }
    }

    grid.commit_replace();
    moved
}
