use wasm_bindgen::prelude::*;

/// Snapshot of the last `simulate()` call
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) flow_ms: f64,
    pub(super) pressure_ms: f64,
    pub(super) viscosity_ms: f64,
    pub(super) units_moved: u32,
    pub(super) pressure_transfers: u32,
    pub(super) total_liquid: f64,
    pub(super) liquid_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn flow_ms(&self) -> f64 { self.flow_ms }
    #[wasm_bindgen(getter)]
    pub fn pressure_ms(&self) -> f64 { self.pressure_ms }
    #[wasm_bindgen(getter)]
    pub fn viscosity_ms(&self) -> f64 { self.viscosity_ms }
    #[wasm_bindgen(getter)]
    pub fn units_moved(&self) -> u32 { self.units_moved }
    #[wasm_bindgen(getter)]
    pub fn pressure_transfers(&self) -> u32 { self.pressure_transfers }
    /// f64 so JS sees an exact number for any realistic grid
    #[wasm_bindgen(getter)]
    pub fn total_liquid(&self) -> f64 { self.total_liquid }
    #[wasm_bindgen(getter)]
    pub fn liquid_cells(&self) -> u32 { self.liquid_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
