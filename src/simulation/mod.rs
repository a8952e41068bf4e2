//! World - sticky-corner items inside one resizable container
//!
//! `SnapWorld` only orchestrates: snapping lives in `systems::snap`,
//! integration and edge collision in `systems::dynamics`.
//! The wasm-facing wrapper is `facade::World`.

use crate::core::math::{Bounds, Point, Vec2};
use crate::domain::{Corner, SnapConfig, SnapResult};
use crate::systems::dynamics::{DynamicAnimator, ItemId};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use snapshot::{ItemSnapshot, WorldSnapshot};

use perf_timer::timed;

/// The simulation world
pub struct SnapWorld {
    animator: DynamicAnimator,
    config: SnapConfig,

    // Container size (points)
    width: f32,
    height: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SnapWorld {
    /// Create a new world with given container size
    pub fn new(width: f32, height: f32) -> SnapResult<Self> {
        init::create_world_core(width, height, SnapConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: SnapConfig) -> SnapResult<Self> {
        init::create_world_core(width, height, config)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width, self.height)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn item_count(&self) -> usize { self.animator.body_count() }

    pub fn config(&self) -> &SnapConfig { &self.config }

    pub fn animator(&self) -> &DynamicAnimator { &self.animator }

    /// Container resize; rejected sizes leave the world untouched
    pub fn resize(&mut self, width: f32, height: f32) -> SnapResult<()> {
        settings::resize(self, width, height)
    }

    /// Replace tuning from a (partial) JSON object
    pub fn load_config_json(&mut self, json: &str) -> SnapResult<()> {
        settings::load_config_json(self, json)
    }

    pub fn set_config(&mut self, config: SnapConfig) -> SnapResult<()> {
        settings::set_config(self, config)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ITEM API ===

    /// Spawn a w x h item centred on (x, y) with its snap behavior.
    /// Returns the item ID, 0 on failure.
    pub fn spawn_item(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        commands::spawn_item(self, x, y, w, h)
    }

    pub fn remove_item(&mut self, id: u32) -> bool {
        commands::remove_item(self, id)
    }

    /// Remove all items
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Finger down: stop snapping and hold the item still
    pub fn begin_drag(&mut self, id: u32) -> bool {
        commands::begin_drag(self, id)
    }

    /// Finger moved: place the item, clamped into the container
    pub fn drag_to(&mut self, id: u32, x: f32, y: f32) -> bool {
        commands::drag_to(self, id, x, y)
    }

    /// Finger up: resume snapping and hand over the release velocity
    pub fn end_drag(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        commands::end_drag(self, id, vx, vy)
    }

    pub fn set_snapping_enabled(&mut self, id: u32, enabled: bool) -> bool {
        commands::set_snapping_enabled(self, id, enabled)
    }

    pub fn is_snapping_enabled(&self, id: u32) -> Option<bool> {
        self.animator.behavior_for_item(ItemId(id)).map(|b| b.is_enabled())
    }

    pub fn current_corner(&self, id: u32) -> Option<Corner> {
        self.animator.behavior_for_item(ItemId(id)).map(|b| b.current_corner())
    }

    pub fn position_for_corner(&self, id: u32, corner: Corner) -> Option<Point> {
        self.animator
            .behavior_for_item(ItemId(id))
            .and_then(|b| b.position_for_corner(corner))
    }

    pub fn item_position(&self, id: u32) -> Option<Point> {
        self.animator.body(ItemId(id)).map(|b| b.pos)
    }

    pub fn item_velocity(&self, id: u32) -> Option<Vec2> {
        self.animator.body(ItemId(id)).map(|b| b.velocity)
    }

    /// Item resting on its corner
    pub fn is_item_settled(&self, id: u32) -> bool {
        snapshot::is_settled(self, ItemId(id))
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        snapshot::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        snapshot::snapshot_json(self)
    }

    /// Step the simulation forward by the configured time step
    pub fn step(&mut self) {
        let dt = self.config.time_step;
        step::step(self, dt);
    }

    /// Step by an explicit duration in seconds
    pub fn step_by(&mut self, dt: f32) {
        step::step(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
