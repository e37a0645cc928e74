use crate::domain::config::SimConfig;
use crate::error::EngineError;
use crate::systems::random::{OffsetSource, Rng};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_config(world: &mut WorldCore, config: SimConfig) -> Result<(), EngineError> {
    if let Err(e) = config.validate() {
        log::warn!("config rejected: {}", e);
        return Err(e);
    }
    let reseed = config.seed != world.config.seed;
    world.config = config;
    if reseed {
        let seed = world.config.seed;
        reseed_streams(world, seed);
    }
    log::debug!("config updated");
    Ok(())
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), EngineError> {
    let config = SimConfig::from_json(json)?;
    set_config(world, config)
}

pub(super) fn reseed(world: &mut WorldCore, seed: u32) {
    world.config.seed = seed;
    reseed_streams(world, seed);
}

fn reseed_streams(world: &mut WorldCore, seed: u32) {
    let seed = if seed == 0 { world.config.effective_seed() } else { seed };
    world.rng = Rng::new(seed);
    world.offsets = OffsetSource::new(seed);
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
