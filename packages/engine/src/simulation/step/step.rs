use crate::systems::{apply_flow, apply_viscosity, resolve_pressure};

use super::perf_timer::timed;
use super::{PerfTimer, WorldCore};

/// Flow -> repeat { Pressure -> Viscosity }
pub(super) fn simulate(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.grid.size() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let WorldCore {
        grid,
        config,
        rng,
        offsets,
        perf_stats,
        ..
    } = world;

    let moved = timed(perf_on, &mut perf_stats.flow_ms, || apply_flow(grid, config, rng));

    let mut transfers = 0u32;
    for _ in 0..config.relax_iterations {
        transfers = transfers.saturating_add(timed(perf_on, &mut perf_stats.pressure_ms, || {
            resolve_pressure(grid, config, offsets)
        }));
        timed(perf_on, &mut perf_stats.viscosity_ms, || apply_viscosity(grid, config));
    }

    if perf_on {
        perf_stats.units_moved = moved;
        perf_stats.pressure_transfers = transfers;
        perf_stats.total_liquid = grid.total_liquid() as f64;
        perf_stats.liquid_cells = grid.liquid_cells() as u32;
        if let Some(start) = step_start {
            perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}
