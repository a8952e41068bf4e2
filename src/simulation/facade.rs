use wasm_bindgen::prelude::*;

use crate::domain::{Corner, SnapError};

use super::perf_stats::PerfStats;
use super::SnapWorld;

fn js_err(e: SnapError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: SnapWorld,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given container size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        Ok(Self {
            core: SnapWorld::new(width, height).map_err(js_err)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn item_count(&self) -> u32 { self.core.item_count() as u32 }

    /// Container resized (e.g. window resize / rotation)
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(js_err)
    }

    /// Replace tuning from a JSON object; omitted fields keep their defaults
    #[wasm_bindgen(js_name = loadConfig)]
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(js_err)
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Spawn an item; returns its ID (0 if it does not fit)
    pub fn spawn_item(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.spawn_item(x, y, w, h)
    }

    pub fn remove_item(&mut self, id: u32) -> bool {
        self.core.remove_item(id)
    }

    pub fn clear(&mut self) {
        self.core.clear()
    }

    pub fn begin_drag(&mut self, id: u32) -> bool {
        self.core.begin_drag(id)
    }

    pub fn drag_to(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.drag_to(id, x, y)
    }

    /// Release with the gesture velocity (points per second)
    pub fn end_drag(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        self.core.end_drag(id, vx, vy)
    }

    pub fn set_snapping_enabled(&mut self, id: u32, enabled: bool) -> bool {
        self.core.set_snapping_enabled(id, enabled)
    }

    /// Ordinal of the item's target corner (see `corner_*` exports)
    pub fn current_corner(&self, id: u32) -> Option<u8> {
        self.core.current_corner(id).map(|c| c as u8)
    }

    /// Resting point of `corner` for this item as [x, y]
    pub fn position_for_corner(&self, id: u32, corner: u8) -> Option<Vec<f32>> {
        let corner = Corner::from_index(corner as usize)?;
        self.core.position_for_corner(id, corner).map(|p| vec![p.x, p.y])
    }

    pub fn item_x(&self, id: u32) -> Option<f32> {
        self.core.item_position(id).map(|p| p.x)
    }

    pub fn item_y(&self, id: u32) -> Option<f32> {
        self.core.item_position(id).map(|p| p.y)
    }

    pub fn is_item_settled(&self, id: u32) -> bool {
        self.core.is_item_settled(id)
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    /// Step the simulation forward by the configured time step
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Step by `dt` seconds (use the rAF delta for variable frame rates)
    pub fn step_by(&mut self, dt: f32) {
        self.core.step_by(dt);
    }
}
