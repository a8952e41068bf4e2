use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) behaviors_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) item_count: u32,
    pub(super) behaviors_stepped: u32,
    pub(super) bodies_integrated: u32,
    pub(super) boundary_hits: u32,
    pub(super) items_settled: u32,
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
    pub fn behaviors_ms(&self) -> f64 { self.behaviors_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn item_count(&self) -> u32 { self.item_count }
    #[wasm_bindgen(getter)]
    pub fn behaviors_stepped(&self) -> u32 { self.behaviors_stepped }
    #[wasm_bindgen(getter)]
    pub fn bodies_integrated(&self) -> u32 { self.bodies_integrated }
    #[wasm_bindgen(getter)]
    pub fn boundary_hits(&self) -> u32 { self.boundary_hits }
    #[wasm_bindgen(getter)]
    pub fn items_settled(&self) -> u32 { self.items_settled }
}
