use crate::core::math::Bounds;
use crate::domain::{ConfigIssue, SnapConfig, SnapResult};
use crate::systems::dynamics::DynamicAnimator;

use super::perf_stats::PerfStats;
use super::SnapWorld;

pub(super) fn create_world_core(width: f32, height: f32, config: SnapConfig) -> SnapResult<SnapWorld> {
    config.validate()?;
    let bounds = Bounds::from_size(width, height);
    if bounds.is_degenerate() {
        return Err(ConfigIssue::DegenerateBounds { width, height }.into());
    }

    let mut animator = DynamicAnimator::new();
    animator.set_reference_bounds(bounds)?;

    log::info!("snap world created: {width}x{height}");

    Ok(SnapWorld {
        animator,
        config,
        width,
        height,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
