use crate::domain::config::SimConfig;
use crate::domain::scene::{Scene, SceneCell};
use crate::grid::Grid;
use crate::systems::random::{OffsetSource, Rng};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, config: SimConfig) -> WorldCore {
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("rejected config, using defaults: {}", e);
            SimConfig::default()
        }
    };
    let seed = config.effective_seed();
    log::debug!("creating {}x{} liquid world (seed {})", width, height, seed);

    WorldCore {
        grid: Grid::new(width, height),
        rng: Rng::new(seed),
        offsets: OffsetSource::new(seed),
        config,
        frame: 0,
        scene: None,
        pixels: vec![0u32; (width as usize) * (height as usize)],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn init(world: &mut WorldCore, width: u32, height: u32) {
    log::debug!("init {}x{}", width, height);
    world.grid = Grid::new(width, height);
    world.pixels = vec![0u32; world.grid.size()];
    world.frame = 0;
    world.reseed(world.config.seed);
}

pub(super) fn load_scene(world: &mut WorldCore, scene: &Scene) {
    install_scene(world, scene.clone());
}

/// Resize to `scene`, seed it and keep it for `reset_scene`
pub(super) fn install_scene(world: &mut WorldCore, scene: Scene) {
    world.init(scene.width(), scene.height());
    apply_scene(world, &scene);
    log::debug!(
        "loaded {}x{} scene with {} liquid units",
        scene.width(),
        scene.height(),
        world.grid.total_liquid()
    );
    world.scene = Some(scene);
}

pub(super) fn reset_scene(world: &mut WorldCore) {
    match world.scene.take() {
        Some(scene) => install_scene(world, scene),
        None => {
            world.clear();
            world.reseed(world.config.seed);
        }
    }
}

fn apply_scene(world: &mut WorldCore, scene: &Scene) {
    for (x, y, cell) in scene.features() {
        match cell {
            SceneCell::Solid => world.grid.set_solid(x, y, true),
            SceneCell::Liquid(n) => world.grid.set_liquid(x, y, n),
            SceneCell::Open => {}
        }
    }
}
