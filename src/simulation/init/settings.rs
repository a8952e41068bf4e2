use crate::core::math::Bounds;
use crate::domain::{ConfigIssue, SnapConfig, SnapResult};

use super::perf_stats::PerfStats;
use super::SnapWorld;

pub(super) fn enable_perf_metrics(world: &mut SnapWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SnapWorld) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn resize(world: &mut SnapWorld, width: f32, height: f32) -> SnapResult<()> {
    let bounds = Bounds::from_size(width, height);
    if bounds.is_degenerate() {
        log::warn!("ignoring resize to {width}x{height}");
        return Err(ConfigIssue::DegenerateBounds { width, height }.into());
    }
    world.animator.set_reference_bounds(bounds)?;
    world.width = width;
    world.height = height;
    Ok(())
}

pub(super) fn load_config_json(world: &mut SnapWorld, json: &str) -> SnapResult<()> {
    let config = SnapConfig::from_json(json)?;
    apply(world, config);
    Ok(())
}

pub(super) fn set_config(world: &mut SnapWorld, config: SnapConfig) -> SnapResult<()> {
    config.validate()?;
    apply(world, config);
    Ok(())
}

/// Retune live behaviors and bodies. Insets stay as they were spawned.
fn apply(world: &mut SnapWorld, config: SnapConfig) {
    for behavior in world.animator.behaviors_mut() {
        behavior.set_tuning(&config);
    }
    for body in world.animator.bodies_mut() {
        body.set_restitution(config.restitution);
        body.set_linear_damping(config.linear_damping);
    }
    world.config = config;
}
