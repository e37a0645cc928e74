use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a JSON config (missing fields use defaults)
    #[wasm_bindgen(js_name = newWithConfig)]
    pub fn new_with_config(width: u32, height: u32, config_json: String) -> Result<World, JsValue> {
        let mut core = WorldCore::new(width, height);
        core.load_config_json(&config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn total_liquid(&self) -> f64 { self.core.total_liquid() as f64 }

    /// Re-allocate an empty grid
    pub fn init(&mut self, width: u32, height: u32) {
        self.core.init(width, height);
    }

    /// Advance one step (call once per rendered frame)
    pub fn simulate(&mut self) {
        self.core.simulate();
    }

    pub fn set_solid(&mut self, x: i32, y: i32, solid: bool) {
        self.core.set_solid(x, y, solid);
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.core.is_solid(x, y)
    }

    pub fn set_liquid(&mut self, x: i32, y: i32, amount: u32) {
        self.core.set_liquid(x, y, amount);
    }

    pub fn get_liquid(&self, x: i32, y: i32) -> u32 {
        self.core.get_liquid(x, y)
    }

    // === BRUSH API ===

    pub fn paint_liquid(&mut self, cx: i32, cy: i32, radius: i32, amount: u32) {
        self.core.paint_liquid(cx, cy, radius, amount);
    }

    pub fn paint_solid(&mut self, cx: i32, cy: i32, radius: i32) {
        self.core.paint_solid(cx, cy, radius);
    }

    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32) {
        self.core.erase(cx, cy, radius);
    }

    pub fn erase_liquid(&mut self, cx: i32, cy: i32, radius: i32) {
        self.core.erase_liquid(cx, cy, radius);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === SCENES ===

    /// Decode a PNG scene and seed the world from it
    pub fn load_scene_png(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.core
            .load_scene_png(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Seed from canvas ImageData (RGBA8)
    pub fn load_scene_rgba(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<(), JsValue> {
        let scene = crate::domain::scene::Scene::from_rgba(width, height, pixels)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.load_scene(&scene);
        Ok(())
    }

    pub fn reset_scene(&mut self) {
        self.core.reset_scene();
    }

    // === CONFIG ===

    pub fn load_config_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDERING ===

    /// Refresh the pixel buffer; read it through `pixels_ptr`
    pub fn render(&mut self) {
        self.core.render();
    }

    /// Get pointer to ABGR pixels (for JS ImageData)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels().len()
    }

    /// PNG screenshot of the last rendered frame
    pub fn snapshot_png(&self) -> Result<Vec<u8>, JsValue> {
        self.core
            .snapshot_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
