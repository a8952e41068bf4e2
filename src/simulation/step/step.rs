use super::snapshot::is_settled;
use super::{timed, SnapWorld};

pub(super) fn step(world: &mut SnapWorld, dt: f32) {
    if !(dt.is_finite() && dt > 0.0) {
        log::warn!("skipping step with dt = {dt}");
        return;
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.item_count = world.animator.body_count() as u32;
    }

    let mut step_ms = 0.0;
    timed(perf_on, &mut step_ms, || {
        // Behaviors BEFORE integration so the new velocities move the items this frame
        let mut behaviors_ms = 0.0;
        let stepped = timed(perf_on, &mut behaviors_ms, || world.animator.step_behaviors(dt));

        let mut integrate_ms = 0.0;
        let (integrated, hits) = timed(perf_on, &mut integrate_ms, || world.animator.integrate(dt));

        if perf_on {
            world.perf_stats.behaviors_ms = behaviors_ms;
            world.perf_stats.integrate_ms = integrate_ms;
            world.perf_stats.behaviors_stepped = stepped;
            world.perf_stats.bodies_integrated = integrated;
            world.perf_stats.boundary_hits = hits;
        }
    });

    if perf_on {
        let settled = world
            .animator
            .bodies()
            .iter()
            .filter(|b| is_settled(world, b.id))
            .count() as u32;
        world.perf_stats.step_ms = step_ms;
        world.perf_stats.items_settled = settled;
    }

    world.frame += 1;
}
