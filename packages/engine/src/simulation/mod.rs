//! World - the liquid simulation facade
//!
//! `WorldCore` owns the grid, the tunables and both random streams, and
//! orders the passes. The work itself lives in systems/; this module only
//! orchestrates, applies user edits and extracts pixels for rendering.
//!
//! Edits (`set_solid`, `set_liquid`, brushes, scene loads) are expected
//! between steps, never during one.

use crate::domain::config::SimConfig;
use crate::domain::scene::Scene;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::systems::random::{OffsetSource, Rng};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    config: SimConfig,

    // Random streams: flow rounding and pressure directions
    rng: Rng,
    offsets: OffsetSource,

    // State
    frame: u64,
    scene: Option<Scene>,

    // ABGR pixels, one per cell, filled by render()
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with default tunables
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, SimConfig::default())
    }

    /// Create an empty world with the given tunables.
    /// An invalid config is replaced by the defaults.
    pub fn with_config(width: u32, height: u32, config: SimConfig) -> Self {
        init::create_world_core(width, height, config)
    }

    /// Re-allocate an empty grid; random streams restart from the seed
    pub fn init(&mut self, width: u32, height: u32) {
        init::init(self, width, height)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn total_liquid(&self) -> u64 { self.grid.total_liquid() }

    pub fn liquid_cells(&self) -> usize { self.grid.liquid_cells() }

    // === Config ===

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SimConfig) -> Result<(), EngineError> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_config_json(self, json)
    }

    /// Restart both random streams from `seed`
    pub fn reseed(&mut self, seed: u32) {
        settings::reseed(self, seed)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Edits ===

    pub fn set_solid(&mut self, x: i32, y: i32, solid: bool) {
        commands::set_solid(self, x, y, solid)
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.grid.is_solid(x, y)
    }

    pub fn set_liquid(&mut self, x: i32, y: i32, amount: u32) {
        commands::set_liquid(self, x, y, amount)
    }

    pub fn add_liquid(&mut self, x: i32, y: i32, amount: u32) {
        commands::add_liquid(self, x, y, amount)
    }

    pub fn get_liquid(&self, x: i32, y: i32) -> u32 {
        self.grid.get_liquid(x, y)
    }

    /// Per-unit velocity of the liquid at (x, y)
    pub fn velocity(&self, x: i32, y: i32) -> (f32, f32) {
        self.grid.velocity(x, y)
    }

    /// Fill open cells in a disc with `amount` units each
    pub fn paint_liquid(&mut self, cx: i32, cy: i32, radius: i32, amount: u32) {
        commands::paint_liquid(self, cx, cy, radius, amount)
    }

    /// Turn every cell in a disc into terrain
    pub fn paint_solid(&mut self, cx: i32, cy: i32, radius: i32) {
        commands::paint_solid(self, cx, cy, radius)
    }

    /// Remove liquid and terrain in a disc
    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32) {
        commands::erase(self, cx, cy, radius)
    }

    /// Remove liquid in a disc, leave terrain alone
    pub fn erase_liquid(&mut self, cx: i32, cy: i32, radius: i32) {
        commands::erase_liquid(self, cx, cy, radius)
    }

    /// Remove all liquid and terrain
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Scenes ===

    /// Resize to the scene and seed terrain and liquid from it
    pub fn load_scene(&mut self, scene: &Scene) {
        init::load_scene(self, scene)
    }

    pub fn load_scene_png(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        let scene = Scene::decode(bytes)?;
        init::install_scene(self, scene);
        Ok(())
    }

    /// Reload the last scene (or clear when none was loaded)
    pub fn reset_scene(&mut self) {
        init::reset_scene(self)
    }

    // === Step ===

    /// Advance exactly one discrete step
    pub fn simulate(&mut self) {
        step::simulate(self);
    }

    // === Rendering ===

    /// Refresh the ABGR pixel buffer from the grid
    pub fn render(&mut self) -> &[u32] {
        render_extract::render(self)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Encode the last rendered frame as PNG
    pub fn snapshot_png(&self) -> Result<Vec<u8>, EngineError> {
        render_extract::snapshot_png(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
