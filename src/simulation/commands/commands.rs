use crate::core::math::Vec2;
use crate::systems::dynamics::{ItemId, SnapBody};
use crate::systems::snap::SnapBehavior;

use super::SnapWorld;

pub(super) fn spawn_item(world: &mut SnapWorld, x: f32, y: f32, w: f32, h: f32) -> u32 {
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return 0;
    }

    let mut body = SnapBody::new_rect(x, y, w, h);
    body.set_restitution(world.config.restitution);
    body.set_linear_damping(world.config.linear_damping);
    let Some(id) = world.animator.add_body(body) else {
        return 0;
    };

    // Rest with the whole item (plus margin) inside the container.
    let inset = w.max(h) * 0.5 + world.config.corner_margin;
    let bounds = world.bounds();
    let Some(body) = world.animator.body(id) else {
        return 0;
    };
    let behavior = match SnapBehavior::for_item(id, body, inset, bounds, &world.config) {
        Ok(behavior) => behavior,
        Err(e) => {
            log::warn!("cannot snap {w}x{h} item: {e}");
            world.animator.remove_body(id);
            return 0;
        }
    };
    if !matches!(world.animator.add_behavior(behavior), Ok(Some(_))) {
        world.animator.remove_body(id);
        return 0;
    }

    id.0
}

pub(super) fn remove_item(world: &mut SnapWorld, id: u32) -> bool {
    world.animator.remove_body(ItemId(id))
}

pub(super) fn clear(world: &mut SnapWorld) {
    world.animator.clear();
}

pub(super) fn begin_drag(world: &mut SnapWorld, id: u32) -> bool {
    let item = ItemId(id);
    let Some(behavior) = world.animator.behavior_for_item_mut(item) else {
        return false;
    };
    behavior.set_enabled(false);
    if let Some(body) = world.animator.body_mut(item) {
        body.velocity = Vec2::zero();
    }
    true
}

pub(super) fn drag_to(world: &mut SnapWorld, id: u32, x: f32, y: f32) -> bool {
    if !(x.is_finite() && y.is_finite()) {
        return false;
    }
    let (width, height) = (world.width, world.height);
    let Some(body) = world.animator.body_mut(ItemId(id)) else {
        return false;
    };
    body.pos = Vec2::new(clamp_axis(x, body.half_width, width), clamp_axis(y, body.half_height, height));
    body.save_prev_state();
    true
}

pub(super) fn end_drag(world: &mut SnapWorld, id: u32, vx: f32, vy: f32) -> bool {
    let Some(behavior) = world.animator.behavior_for_item_mut(ItemId(id)) else {
        return false;
    };
    behavior.set_enabled(true);
    behavior.add_linear_velocity(Vec2::new(vx, vy));
    true
}

pub(super) fn set_snapping_enabled(world: &mut SnapWorld, id: u32, enabled: bool) -> bool {
    match world.animator.behavior_for_item_mut(ItemId(id)) {
        Some(behavior) => {
            behavior.set_enabled(enabled);
            true
        }
        None => false,
    }
}

fn clamp_axis(v: f32, half: f32, extent: f32) -> f32 {
    if half * 2.0 >= extent {
        extent * 0.5
    } else {
        v.clamp(half, extent - half)
    }
}
