//! Liquid Engine - discrete grid liquid simulation for the Particula sandbox
//!
//! Liquid is a count of units per cell plus a shared momentum. Each frame
//! the units flow under gravity, then pressure levels overfull cells and
//! viscosity smooths the velocity field.
//!
//! Layout:
//! - spatial/     - grid storage and staging commits
//! - systems/     - flow, pressure, viscosity passes and random streams
//! - domain/      - tunables and scene images
//! - simulation/  - world facade (native + wasm)

pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod error;

pub mod world {
    pub use crate::simulation::*;
}

// Short paths used across the crate
pub use spatial::grid;
pub use domain::config;
pub use domain::scene;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (browser entry point)
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(all(feature = "console_log", target_arch = "wasm32"))]
    {
        // A second init() keeps the logger already installed
        let _ = console_log::init_with_level(log::Level::Info);
    }

    log::info!("liquid engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use config::SimConfig;
pub use error::EngineError;
pub use grid::{Cell, Grid};
pub use scene::Scene;
pub use simulation::{PerfStats, World, WorldCore};
